//! Creator dashboard: channel stats and the upload management table.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::net::types::{ChannelStats, Video};
use crate::state::toast::Toasts;
use crate::util::format::{format_duration, format_views, now_millis, relative_time};

/// Label/value pairs for the stat cards, in display order.
fn stat_cards(stats: &ChannelStats) -> [(&'static str, String); 4] {
    [
        ("Total Views", format_views(stats.total_views)),
        ("Subscribers", stats.total_subscribers.to_string()),
        ("Videos", stats.total_videos.to_string()),
        ("Likes", format_views(stats.total_likes)),
    ]
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let toasts = expect_context::<Toasts>();

    let stats = RwSignal::new(None::<ChannelStats>);
    let videos = RwSignal::new(Vec::<Video>::new());
    let videos_loading = RwSignal::new(true);
    let delete_target = RwSignal::new(None::<String>);

    let fetch_stats = move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_dashboard::channel_stats().await {
                Ok(fetched) => stats.set(Some(fetched)),
                Err(message) => toasts.error(&message),
            }
        });
    };

    let fetch_videos = move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_dashboard::channel_videos().await {
                Ok(batch) => videos.set(batch.docs),
                Err(message) => toasts.error(&message),
            }
            videos_loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = toasts;
            videos_loading.set(false);
        }
    };

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        fetch_stats();
        fetch_videos();
    });

    let on_toggle_publish = move |video_id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_videos::toggle_publish(&video_id).await {
                Ok(()) => {
                    toasts.success("Video status updated");
                    fetch_videos();
                }
                Err(message) => toasts.error(&message),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = video_id;
        }
    };

    let on_delete_confirm = move |_| {
        let Some(video_id) = delete_target.get_untracked() else {
            return;
        };
        delete_target.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_videos::delete_video(&video_id).await {
                Ok(()) => {
                    toasts.success("Video deleted successfully");
                    fetch_videos();
                    fetch_stats();
                }
                Err(message) => toasts.error(&message),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = video_id;
        }
    };

    view! {
        <div class="page dashboard">
            <div class="page__heading">
                <h1>"Channel Dashboard"</h1>
                <p>"Track your channel and manage your uploads"</p>
            </div>

            <div class="dashboard__stats">
                {move || {
                    stats
                        .get()
                        .map(|s| {
                            stat_cards(&s)
                                .into_iter()
                                .map(|(label, value)| {
                                    view! {
                                        <div class="dashboard__stat-card">
                                            <span class="dashboard__stat-value">{value}</span>
                                            <span class="dashboard__stat-label">{label}</span>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        })
                }}
            </div>

            <section class="dashboard__videos">
                <div class="dashboard__videos-head">
                    <h2>"Your Videos"</h2>
                    <a class="btn btn--primary" href="/upload">
                        "+ Upload Video"
                    </a>
                </div>
                <Show
                    when=move || !videos_loading.get()
                    fallback=|| view! { <p>"Loading videos..."</p> }
                >
                    <Show
                        when=move || !videos.get().is_empty()
                        fallback=|| view! { <p class="dashboard__empty">"No videos uploaded yet"</p> }
                    >
                        <table class="dashboard__table">
                            <thead>
                                <tr>
                                    <th>"Video"</th>
                                    <th>"Views"</th>
                                    <th>"Uploaded"</th>
                                    <th>"Status"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    videos
                                        .get()
                                        .into_iter()
                                        .map(|video| {
                                            let published = video.is_published.unwrap_or(true);
                                            let toggle_id = video.id.clone();
                                            let delete_id = video.id.clone();
                                            view! {
                                                <tr>
                                                    <td class="dashboard__video-cell">
                                                        <a href=format!("/video/{}", video.id)>
                                                            <img src=video.thumbnail.clone().unwrap_or_default() alt=""/>
                                                            <span>{video.title.clone()}</span>
                                                        </a>
                                                        <span class="dashboard__duration">
                                                            {format_duration(video.duration)}
                                                        </span>
                                                    </td>
                                                    <td>{format_views(video.views)}</td>
                                                    <td>{relative_time(&video.created_at, now_millis())}</td>
                                                    <td>
                                                        <button
                                                            class="dashboard__status"
                                                            class:dashboard__status--live=published
                                                            on:click=move |_| on_toggle_publish(toggle_id.clone())
                                                        >
                                                            {if published { "Published" } else { "Unpublished" }}
                                                        </button>
                                                    </td>
                                                    <td>
                                                        <button
                                                            class="btn btn--danger"
                                                            on:click=move |_| delete_target.set(Some(delete_id.clone()))
                                                        >
                                                            "Delete"
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </tbody>
                        </table>
                    </Show>
                </Show>
            </section>

            <Show when=move || delete_target.get().is_some()>
                <div class="dialog-backdrop" on:click=move |_| delete_target.set(None)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Delete Video"</h2>
                        <p class="dialog__danger">
                            "This will permanently delete this video and its comments."
                        </p>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| delete_target.set(None)>
                                "Cancel"
                            </button>
                            <button class="btn btn--danger" on:click=on_delete_confirm>
                                "Delete"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
