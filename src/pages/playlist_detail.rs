//! Playlist detail page: info header plus contained videos, with removal
//! for the owner.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::video_card::VideoCard;
use crate::net::types::Playlist;
use crate::state::session::Session;
use crate::state::toast::Toasts;

#[component]
pub fn PlaylistDetailPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let toasts = expect_context::<Toasts>();
    let params = use_params_map();
    let playlist_id = move || params.get().get("id").unwrap_or_default();

    let playlist = RwSignal::new(None::<Playlist>);
    let loading = RwSignal::new(true);

    let fetch_playlist = move |id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_playlists::playlist_by_id(&id).await {
                Ok(fetched) => playlist.set(Some(fetched)),
                Err(message) => toasts.error(&message),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, toasts);
            loading.set(false);
        }
    };

    Effect::new(move || {
        let id = playlist_id();
        if id.is_empty() {
            return;
        }
        loading.set(true);
        fetch_playlist(id);
    });

    let on_remove = move |video_id: String| {
        let id = playlist_id();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_playlists::remove_video_from_playlist(&video_id, &id).await {
                Ok(()) => {
                    toasts.success("Removed from playlist");
                    fetch_playlist(id);
                }
                Err(message) => toasts.error(&message),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (video_id, id);
        }
    };

    view! {
        <div class="page playlist-detail">
            <Show
                when=move || playlist.get().is_some()
                fallback=move || {
                    view! {
                        <Show when=move || loading.get() fallback=|| view! { <p>"Playlist not found"</p> }>
                            <p>"Loading playlist..."</p>
                        </Show>
                    }
                }
            >
                {move || {
                    playlist
                        .get()
                        .map(|p| {
                            let owns = session
                                .read()
                                .user
                                .zip(p.owner.clone())
                                .is_some_and(|(user, owner)| user.id == owner.id);
                            let videos = p.videos.clone().unwrap_or_default();
                            view! {
                                <div class="page__heading">
                                    <h1>{p.name.clone()}</h1>
                                    <p>{p.description.clone()}</p>
                                    <span class="playlist-detail__count">
                                        {format!("{} videos", p.video_count())}
                                    </span>
                                </div>
                                <div class="playlist-detail__videos">
                                    {videos
                                        .into_iter()
                                        .map(|video| {
                                            let video_id = video.id.clone();
                                            view! {
                                                <div class="playlist-detail__row">
                                                    <VideoCard video=video/>
                                                    <Show when=move || owns>
                                                        <button
                                                            class="btn btn--ghost playlist-detail__remove"
                                                            on:click={
                                                                let video_id = video_id.clone();
                                                                move |_| on_remove(video_id.clone())
                                                            }
                                                        >
                                                            "Remove"
                                                        </button>
                                                    </Show>
                                                </div>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                        })
                }}
            </Show>
        </div>
    }
}
