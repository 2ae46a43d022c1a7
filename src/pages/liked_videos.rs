//! Liked-videos library page.

use leptos::prelude::*;

use crate::components::video_grid::VideoGrid;
use crate::net::types::Video;
use crate::state::toast::Toasts;

#[component]
pub fn LikedVideosPage() -> impl IntoView {
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
            match crate::net::api_videos::liked_videos().await {
                Ok(items) => videos.set(items.into_iter().map(|item| item.liked_video).collect()),
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
                <h1>"Liked Videos"</h1>
                <p>"Videos you've liked"</p>
            </div>
            {move || view! { <VideoGrid videos=videos.get() loading=loading.get()/> }}
        </div>
    }
}
