//! Responsive grid of video cards with loading and empty states.

use leptos::prelude::*;

use crate::components::video_card::VideoCard;
use crate::net::types::Video;

/// Grid of [`VideoCard`]s. Callers re-render this from a reactive closure
/// whenever their video list changes.
#[component]
pub fn VideoGrid(
    videos: Vec<Video>,
    #[prop(optional)] loading: bool,
    #[prop(default = true)] show_channel: bool,
) -> impl IntoView {
    if loading {
        return view! {
            <div class="video-grid video-grid--loading">
                {(0..8)
                    .map(|_| view! { <div class="video-grid__skeleton" aria-hidden="true"></div> })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any();
    }
    if videos.is_empty() {
        return view! {
            <div class="video-grid__empty">
                <p>"No videos found"</p>
            </div>
        }
        .into_any();
    }
    view! {
        <div class="video-grid">
            {videos
                .into_iter()
                .map(|video| view! { <VideoCard video=video show_channel=show_channel/> })
                .collect::<Vec<_>>()}
        </div>
    }
    .into_any()
}
