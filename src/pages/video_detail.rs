//! Watch page: player, video info, channel card, and comments.

#[cfg(test)]
#[path = "video_detail_test.rs"]
mod video_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::types::{Comment, Video};
use crate::state::session::Session;
use crate::state::toast::Toasts;
use crate::util::format::{format_subscribers, format_views, now_millis, relative_time};

fn subscribe_label(is_subscribed: bool) -> &'static str {
    if is_subscribed { "Subscribed" } else { "Subscribe" }
}

/// The subscribe button is hidden on the viewer's own videos.
fn owns_video(viewer_id: Option<&str>, owner_id: &str) -> bool {
    viewer_id == Some(owner_id)
}

#[component]
pub fn VideoDetailPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let toasts = expect_context::<Toasts>();
    let params = use_params_map();
    let video_id = move || params.get().get("id").unwrap_or_default();

    let video = RwSignal::new(None::<Video>);
    let comments = RwSignal::new(Vec::<Comment>::new());
    let loading = RwSignal::new(true);
    let comment_text = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let fetch_video = move |id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_videos::video_by_id(&id).await {
                Ok(fetched) => video.set(Some(fetched)),
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

    let fetch_comments = move |id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            // Comment fetch failures degrade to an empty list quietly.
            if let Ok(batch) = crate::net::api_comments::video_comments(&id).await {
                comments.set(batch.docs);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    };

    Effect::new(move || {
        let id = video_id();
        if id.is_empty() {
            return;
        }
        loading.set(true);
        fetch_video(id.clone());
        fetch_comments(id);
    });

    let on_like = move |_| {
        if !session.read_untracked().is_authenticated() {
            toasts.error("Please login to like videos");
            return;
        }
        let id = video_id();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_videos::toggle_video_like(&id).await {
                Ok(()) => fetch_video(id),
                Err(message) => toasts.error(&message),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    };

    let on_subscribe = move |_| {
        if !session.read_untracked().is_authenticated() {
            toasts.error("Please login to subscribe");
            return;
        }
        let Some(owner_id) = video.get_untracked().and_then(|v| v.channel().map(|c| c.id.clone())) else {
            return;
        };
        let id = video_id();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_subscriptions::toggle_subscription(&owner_id).await {
                Ok(()) => fetch_video(id),
                Err(message) => toasts.error(&message),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (owner_id, id);
        }
    };

    let on_comment_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !session.read_untracked().is_authenticated() {
            toasts.error("Please login to comment");
            return;
        }
        let content = comment_text.get().trim().to_owned();
        if content.is_empty() || submitting.get() {
            return;
        }
        submitting.set(true);
        let id = video_id();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_comments::add_comment(&id, &content).await {
                Ok(_) => {
                    comment_text.set(String::new());
                    toasts.success("Comment added successfully");
                    fetch_comments(id);
                }
                Err(message) => toasts.error(&message),
            }
            submitting.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, content);
            submitting.set(false);
        }
    };

    let channel_card = move || {
        let state = session.read();
        video.get().and_then(|v| v.channel().cloned()).map(|owner| {
            let show_subscribe = state.is_authenticated()
                && !owns_video(state.user.as_ref().map(|u| u.id.as_str()), &owner.id);
            view! {
                <div class="watch__channel">
                    <a class="watch__channel-link" href=format!("/channel/{}", owner.username)>
                        <img class="watch__channel-avatar" src=owner.avatar.clone().unwrap_or_default() alt=owner.username.clone()/>
                        <div>
                            <h3>{owner.username.clone()}</h3>
                            <p>{format_subscribers(owner.subscribers_count)}</p>
                        </div>
                    </a>
                    <Show when=move || show_subscribe>
                        <button
                            class="btn"
                            class:btn--primary=!owner.is_subscribed
                            on:click=on_subscribe
                        >
                            {subscribe_label(owner.is_subscribed)}
                        </button>
                    </Show>
                </div>
            }
        })
    };

    view! {
        <div class="page watch">
            <Show
                when=move || video.get().is_some()
                fallback=move || {
                    view! {
                        <Show when=move || loading.get() fallback=|| view! { <p class="watch__missing">"Video not found"</p> }>
                            <div class="watch__skeleton" aria-hidden="true"></div>
                        </Show>
                    }
                }
            >
                {move || {
                    video
                        .get()
                        .map(|v| {
                            let age = relative_time(&v.created_at, now_millis());
                            view! {
                                <div class="watch__player">
                                    <video controls autoplay src=v.video_file.clone().unwrap_or_default()></video>
                                </div>
                                <h1 class="watch__title">{v.title.clone()}</h1>
                                <div class="watch__meta-row">
                                    <span class="watch__meta">
                                        {format!("{} views • {age}", format_views(v.views))}
                                    </span>
                                    <button class="watch__like" class:watch__like--active=v.is_liked on:click=on_like>
                                        {format!("▲ {}", v.likes_count)}
                                    </button>
                                </div>
                                {channel_card()}
                                <div class="watch__description">
                                    <p>{v.description.clone()}</p>
                                </div>
                            }
                        })
                }}
            </Show>

            <section class="watch__comments">
                <h3>{move || format!("Comments ({})", comments.get().len())}</h3>
                <Show when=move || session.read().is_authenticated()>
                    <form class="watch__comment-form" on:submit=on_comment_submit>
                        <textarea
                            class="watch__comment-input"
                            placeholder="Add a comment..."
                            prop:value=move || comment_text.get()
                            on:input=move |ev| comment_text.set(event_target_value(&ev))
                        ></textarea>
                        <div class="watch__comment-actions">
                            <button class="btn btn--ghost" type="button" on:click=move |_| comment_text.set(String::new())>
                                "Cancel"
                            </button>
                            <button
                                class="btn btn--primary"
                                type="submit"
                                disabled=move || comment_text.get().trim().is_empty() || submitting.get()
                            >
                                {move || if submitting.get() { "Posting..." } else { "Comment" }}
                            </button>
                        </div>
                    </form>
                </Show>
                {move || {
                    comments
                        .get()
                        .into_iter()
                        .map(|comment| {
                            let author = comment.owner.as_ref();
                            let name = author.map(|o| o.username.clone()).unwrap_or_default();
                            let avatar = author.and_then(|o| o.avatar.clone()).unwrap_or_default();
                            let age = relative_time(&comment.created_at, now_millis());
                            view! {
                                <div class="watch__comment">
                                    <img class="watch__comment-avatar" src=avatar alt=name.clone()/>
                                    <div>
                                        <span class="watch__comment-author">{name}</span>
                                        <span class="watch__comment-age">{age}</span>
                                        <p class="watch__comment-body">{comment.content.clone()}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </section>
        </div>
    }
}
