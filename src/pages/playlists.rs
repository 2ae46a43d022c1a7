//! Playlists page: the user's playlists plus a create dialog.

use leptos::prelude::*;

use crate::net::types::Playlist;
use crate::state::session::Session;
use crate::state::toast::Toasts;

#[component]
pub fn PlaylistsPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let toasts = expect_context::<Toasts>();

    let playlists = RwSignal::new(Vec::<Playlist>::new());
    let loading = RwSignal::new(true);
    let show_create = RwSignal::new(false);

    let fetch_playlists = move || {
        let Some(user) = session.read_untracked().user else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let user_id = user.id;
            leptos::task::spawn_local(async move {
                match crate::net::api_playlists::user_playlists(&user_id).await {
                    Ok(items) => playlists.set(items),
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
    };

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if session.read().user.is_none() || requested.get() {
            return;
        }
        requested.set(true);
        fetch_playlists();
    });

    let on_created = Callback::new(move |()| {
        show_create.set(false);
        loading.set(true);
        fetch_playlists();
    });
    let on_cancel = Callback::new(move |()| show_create.set(false));

    view! {
        <div class="page playlists">
            <div class="page__heading playlists__heading">
                <div>
                    <h1>"Playlists"</h1>
                    <p>"Collections you've put together"</p>
                </div>
                <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                    "+ New Playlist"
                </button>
            </div>

            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading playlists..."</p> }>
                <Show
                    when=move || !playlists.get().is_empty()
                    fallback=|| view! { <p class="playlists__empty">"No playlists yet. Create your first one."</p> }
                >
                    <div class="playlists__grid">
                        {move || {
                            playlists
                                .get()
                                .into_iter()
                                .map(|playlist| {
                                    view! {
                                        <a class="playlists__card" href=format!("/playlist/{}", playlist.id)>
                                            <span class="playlists__card-name">{playlist.name.clone()}</span>
                                            <span class="playlists__card-count">
                                                {format!("{} videos", playlist.video_count())}
                                            </span>
                                            <p class="playlists__card-description">{playlist.description.clone()}</p>
                                        </a>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>

            <Show when=move || show_create.get()>
                <CreatePlaylistDialog on_cancel=on_cancel on_created=on_created/>
            </Show>
        </div>
    }
}

/// Modal dialog for creating a new playlist.
#[component]
fn CreatePlaylistDialog(on_cancel: Callback<()>, on_created: Callback<()>) -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());

    let submit = Callback::new(move |()| {
        let name_value = name.get().trim().to_owned();
        if name_value.is_empty() {
            return;
        }
        let description_value = description.get().trim().to_owned();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_playlists::create_playlist(&name_value, &description_value).await {
                Ok(_) => {
                    toasts.success("Playlist created");
                    on_created.run(());
                }
                Err(message) => toasts.error(&message),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name_value, description_value, toasts);
            on_created.run(());
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create Playlist"</h2>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <textarea
                        class="dialog__input"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Create"
                    </button>
                </div>
            </div>
        </div>
    }
}
