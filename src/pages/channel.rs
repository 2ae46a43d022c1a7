//! Channel page: cover, profile counters, subscribe toggle, and uploads.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::video_grid::VideoGrid;
use crate::net::types::{ChannelProfile, Video};
use crate::state::session::Session;
use crate::state::toast::Toasts;
use crate::util::format::format_subscribers;

#[component]
pub fn ChannelPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let toasts = expect_context::<Toasts>();
    let params = use_params_map();
    let username = move || params.get().get("username").unwrap_or_default();

    let profile = RwSignal::new(None::<ChannelProfile>);
    let videos = RwSignal::new(Vec::<Video>::new());
    let loading = RwSignal::new(true);

    let fetch_profile = move |name: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_users::channel_profile(&name).await {
                Ok(fetched) => {
                    let user_id = fetched.id.clone();
                    profile.set(Some(fetched));
                    // Uploads need the channel id resolved first.
                    if let Ok(batch) = crate::net::api_videos::list_videos(
                        &crate::net::api_videos::VideoQuery::by_user(&user_id),
                    )
                    .await
                    {
                        videos.set(batch.docs);
                    }
                }
                Err(message) => toasts.error(&message),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name, toasts);
            loading.set(false);
        }
    };

    Effect::new(move || {
        let name = username();
        if name.is_empty() {
            return;
        }
        loading.set(true);
        fetch_profile(name);
    });

    let on_subscribe = move |_| {
        if !session.read_untracked().is_authenticated() {
            toasts.error("Please login to subscribe");
            return;
        }
        let Some(channel_id) = profile.get_untracked().map(|p| p.id) else {
            return;
        };
        let name = username();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_subscriptions::toggle_subscription(&channel_id).await {
                Ok(()) => fetch_profile(name),
                Err(message) => toasts.error(&message),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (channel_id, name);
        }
    };

    view! {
        <div class="page channel">
            {move || {
                profile
                    .get()
                    .map(|p| {
                        let own_channel = session
                            .read()
                            .user
                            .is_some_and(|user| user.id == p.id);
                        view! {
                            <div class="channel__cover">
                                <img src=p.cover_image.clone().unwrap_or_default() alt=""/>
                            </div>
                            <div class="channel__head">
                                <img class="channel__avatar" src=p.avatar.clone().unwrap_or_default() alt=p.username.clone()/>
                                <div class="channel__identity">
                                    <h1>{p.full_name.clone()}</h1>
                                    <p class="channel__handle">{format!("@{}", p.username)}</p>
                                    <p class="channel__counts">
                                        {format!(
                                            "{} • {} subscribed",
                                            format_subscribers(p.subscribers_count),
                                            p.channels_subscribed_to_count,
                                        )}
                                    </p>
                                </div>
                                <Show when=move || !own_channel>
                                    <button
                                        class="btn"
                                        class:btn--primary=!p.is_subscribed
                                        on:click=on_subscribe
                                    >
                                        {if p.is_subscribed { "Subscribed" } else { "Subscribe" }}
                                    </button>
                                </Show>
                            </div>
                        }
                    })
            }}

            <h2 class="channel__videos-heading">"Videos"</h2>
            {move || view! { <VideoGrid videos=videos.get() loading=loading.get() show_channel=false/> }}
        </div>
    }
}
