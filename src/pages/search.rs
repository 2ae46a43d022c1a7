//! Search results page driven by the `q` query parameter.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::video_grid::VideoGrid;
use crate::net::types::Video;
use crate::state::toast::Toasts;

#[component]
pub fn SearchPage() -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    let query = use_query_map();
    let term = move || query.get().get("q").unwrap_or_default();

    let videos = RwSignal::new(Vec::<Video>::new());
    let loading = RwSignal::new(false);

    // Refetch whenever the search term changes.
    Effect::new(move || {
        let term_value = term();
        if term_value.trim().is_empty() {
            videos.set(Vec::new());
            return;
        }
        loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_videos::list_videos(&crate::net::api_videos::VideoQuery::search(term_value.trim())).await {
                Ok(batch) => videos.set(batch.docs),
                Err(message) => toasts.error(&message),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (term_value, toasts);
            loading.set(false);
        }
    });

    view! {
        <div class="page">
            <div class="page__heading">
                <Show
                    when=move || !term().trim().is_empty()
                    fallback=|| view! { <h1>"Search"</h1> <p>"Type something in the search box above."</p> }
                >
                    <h1>{move || format!("Search Results for \"{}\"", term())}</h1>
                </Show>
            </div>
            {move || view! { <VideoGrid videos=videos.get() loading=loading.get()/> }}
        </div>
    }
}
