//! Fixed top bar: logo, search box, and the account menu.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::Session;

/// Application header. Search submits navigate to `/search?q=...`; the
/// account menu exposes profile, dashboard, and logout.
#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    let search = RwSignal::new(String::new());
    let show_menu = RwSignal::new(false);

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let term = search.get().trim().to_owned();
        if term.is_empty() {
            return;
        }
        navigate(
            &format!("/search?q={}", urlencoding::encode(&term)),
            NavigateOptions::default(),
        );
    };

    let on_logout = move |_| {
        show_menu.set(false);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                session.logout().await;
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/");
                }
            });
        }
    };

    let avatar = move || {
        session
            .read()
            .user
            .and_then(|user| user.avatar)
            .unwrap_or_default()
    };

    view! {
        <header class="header">
            <a class="header__logo" href="/">
                <span class="header__logo-mark">"VT"</span>
                <span class="header__logo-name">"VideoTube"</span>
            </a>

            <form class="header__search" on:submit=on_search>
                <input
                    class="header__search-input"
                    type="text"
                    placeholder="Search videos..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <button class="header__search-button" type="submit" aria-label="Search">
                    "⌕"
                </button>
            </form>

            <div class="header__actions">
                <Show
                    when=move || session.read().is_authenticated()
                    fallback=|| {
                        view! {
                            <a class="btn btn--ghost" href="/login">
                                "Login"
                            </a>
                            <a class="btn btn--primary" href="/register">
                                "Sign Up"
                            </a>
                        }
                    }
                >
                    <a class="header__upload" href="/upload" title="Upload video">
                        "Upload"
                    </a>
                    <button
                        class="header__avatar-button"
                        on:click=move |_| show_menu.update(|open| *open = !*open)
                        aria-label="Account menu"
                    >
                        <img class="header__avatar" src=avatar alt="avatar"/>
                    </button>
                    <Show when=move || show_menu.get()>
                        <div class="header__menu">
                            <a class="header__menu-item" href="/profile" on:click=move |_| show_menu.set(false)>
                                "Profile"
                            </a>
                            <a class="header__menu-item" href="/dashboard" on:click=move |_| show_menu.set(false)>
                                "Dashboard"
                            </a>
                            <button class="header__menu-item" on:click=on_logout>
                                "Logout"
                            </button>
                        </div>
                    </Show>
                </Show>
            </div>
        </header>
    }
}
