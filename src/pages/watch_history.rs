//! Watch-history library page.

use leptos::prelude::*;

use crate::components::video_grid::VideoGrid;
use crate::net::types::Video;
use crate::state::toast::Toasts;

#[component]
pub fn WatchHistoryPage() -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    let videos = RwSignal::new(Vec::<Video>::new());
    let loading = RwSignal::new(true);

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_users::watch_history().await {
                Ok(items) => videos.set(items),
                Err(message) => toasts.error(&message),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = toasts;
            loading.set(false);
        }
    });

    view! {
        <div class="page">
            <div class="page__heading">
                <h1>"Watch History"</h1>
                <p>"Videos you've watched recently"</p>
            </div>
            {move || view! { <VideoGrid videos=videos.get() loading=loading.get()/> }}
        </div>
    }
}
