//! Home page: paginated grid of the newest videos.

use leptos::prelude::*;

use crate::components::video_grid::VideoGrid;
use crate::net::types::Video;
use crate::state::toast::Toasts;

#[component]
pub fn HomePage() -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    let videos = RwSignal::new(Vec::<Video>::new());
    let loading = RwSignal::new(true);
    let loading_more = RwSignal::new(false);
    let page = RwSignal::new(1u32);
    let has_more = RwSignal::new(false);

    let fetch_page = move |page_num: u32| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_videos::list_videos(&crate::net::api_videos::VideoQuery::page(page_num)).await {
                Ok(batch) => {
                    if page_num == 1 {
                        videos.set(batch.docs);
                    } else {
                        videos.update(|v| v.extend(batch.docs));
                    }
                    has_more.set(batch.has_next_page);
                    page.set(page_num);
                }
                Err(message) => toasts.error(&message),
            }
            loading.set(false);
            loading_more.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (page_num, toasts);
            loading.set(false);
        }
    };

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        fetch_page(1);
    });

    let on_load_more = move |_| {
        if loading.get() || loading_more.get() || !has_more.get() {
            return;
        }
        loading_more.set(true);
        fetch_page(page.get() + 1);
    };

    view! {
        <div class="page">
            <div class="page__heading">
                <h1>"Trending Videos"</h1>
                <p>"Discover the latest and most popular content"</p>
            </div>

            {move || view! { <VideoGrid videos=videos.get() loading=loading.get()/> }}

            <Show when=move || has_more.get() && !loading.get() && !videos.get().is_empty()>
                <div class="page__load-more">
                    <button class="btn btn--primary" on:click=on_load_more disabled=move || loading_more.get()>
                        {move || if loading_more.get() { "Loading..." } else { "Load More Videos" }}
                    </button>
                </div>
            </Show>
        </div>
    }
}
