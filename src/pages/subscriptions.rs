//! Subscriptions page: latest videos plus the followed-channels list.

use leptos::prelude::*;

use crate::components::video_grid::VideoGrid;
use crate::net::types::{Subscription, Video};
use crate::state::session::Session;
use crate::state::toast::Toasts;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Videos,
    Channels,
}

#[component]
pub fn SubscriptionsPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let toasts = expect_context::<Toasts>();

    let videos = RwSignal::new(Vec::<Video>::new());
    let channels = RwSignal::new(Vec::<Subscription>::new());
    let loading = RwSignal::new(true);
    let tab = RwSignal::new(Tab::Videos);

    // The channel list needs the resolved user id, so fetch keys off the
    // session rather than mount order.
    let requested = RwSignal::new(false);
    Effect::new(move || {
        let Some(user) = session.read().user else {
            return;
        };
        if requested.get() {
            return;
        }
        requested.set(true);
        #[cfg(feature = "hydrate")]
        {
            let user_id = user.id.clone();
            leptos::task::spawn_local(async move {
                if let Ok(batch) = crate::net::api_subscriptions::subscribed_channels(&user_id).await {
                    channels.set(batch.docs);
                }
            });
            leptos::task::spawn_local(async move {
                use crate::net::api_videos::VideoQuery;
                match crate::net::api_videos::list_videos(&VideoQuery { limit: 20, ..VideoQuery::default() }).await {
                    Ok(batch) => videos.set(batch.docs),
                    Err(message) => toasts.error(&message),
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user, toasts);
            loading.set(false);
        }
    });

    view! {
        <div class="page subscriptions">
            <div class="page__heading">
                <h1>"Subscriptions"</h1>
                <p>"Latest videos from channels you follow"</p>
            </div>

            <div class="subscriptions__tabs">
                <button
                    class="subscriptions__tab"
                    class:subscriptions__tab--active=move || tab.get() == Tab::Videos
                    on:click=move |_| tab.set(Tab::Videos)
                >
                    "Videos"
                </button>
                <button
                    class="subscriptions__tab"
                    class:subscriptions__tab--active=move || tab.get() == Tab::Channels
                    on:click=move |_| tab.set(Tab::Channels)
                >
                    {move || format!("Channels ({})", channels.get().len())}
                </button>
            </div>

            <Show
                when=move || tab.get() == Tab::Videos
                fallback=move || {
                    view! {
                        <div class="subscriptions__channels">
                            {move || {
                                channels
                                    .get()
                                    .into_iter()
                                    .map(|sub| {
                                        let channel = sub.subscribed_channel;
                                        view! {
                                            <a class="subscriptions__channel" href=format!("/channel/{}", channel.username)>
                                                <img src=channel.avatar.clone().unwrap_or_default() alt=channel.username.clone()/>
                                                <div>
                                                    <span class="subscriptions__channel-name">
                                                        {channel.full_name.clone().unwrap_or_else(|| channel.username.clone())}
                                                    </span>
                                                    <span class="subscriptions__channel-handle">
                                                        {format!("@{}", channel.username)}
                                                    </span>
                                                </div>
                                            </a>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                            <Show when=move || channels.get().is_empty()>
                                <p class="subscriptions__empty">"You are not subscribed to any channels yet."</p>
                            </Show>
                        </div>
                    }
                }
            >
                {move || view! { <VideoGrid videos=videos.get() loading=loading.get()/> }}
            </Show>
        </div>
    }
}
