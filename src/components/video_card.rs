//! Video card for grid listings.
//!
//! DESIGN
//! ======
//! Keeps video presentation consistent across home, search, channel, and
//! library pages while centralizing the watch/channel navigation targets.

use leptos::prelude::*;

use crate::net::types::Video;
use crate::util::format::{format_duration, format_views, now_millis, relative_time};

/// A clickable card for one video, with an optional channel row.
#[component]
pub fn VideoCard(video: Video, #[prop(default = true)] show_channel: bool) -> impl IntoView {
    let watch_href = format!("/video/{}", video.id);
    let channel = video.channel().cloned();
    let meta = format!(
        "{} views • {}",
        format_views(video.views),
        relative_time(&video.created_at, now_millis())
    );

    view! {
        <div class="video-card">
            <a class="video-card__media" href=watch_href.clone()>
                <img
                    class="video-card__thumbnail"
                    src=video.thumbnail.clone().unwrap_or_default()
                    alt=video.title.clone()
                />
                <span class="video-card__duration">{format_duration(video.duration)}</span>
            </a>
            <div class="video-card__body">
                {channel
                    .filter(|_| show_channel)
                    .map(|owner| {
                        let channel_href = format!("/channel/{}", owner.username);
                        view! {
                            <a class="video-card__channel" href=channel_href.clone()>
                                <img
                                    class="video-card__avatar"
                                    src=owner.avatar.clone().unwrap_or_default()
                                    alt=owner.username.clone()
                                />
                            </a>
                            <div class="video-card__info">
                                <a class="video-card__title" href=watch_href.clone()>
                                    {video.title.clone()}
                                </a>
                                <a class="video-card__channel-name" href=channel_href>
                                    {owner.username.clone()}
                                </a>
                                <span class="video-card__meta">{meta.clone()}</span>
                            </div>
                        }
                        .into_any()
                    })
                    .unwrap_or_else(|| {
                        view! {
                            <div class="video-card__info">
                                <a class="video-card__title" href=watch_href.clone()>
                                    {video.title.clone()}
                                </a>
                                <span class="video-card__meta">{meta.clone()}</span>
                            </div>
                        }
                        .into_any()
                    })}
            </div>
        </div>
    }
}
