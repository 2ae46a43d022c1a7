//! Navigation sidebar with public and personal sections.

use leptos::prelude::*;

use crate::state::session::Session;

const PUBLIC_LINKS: [(&str, &str); 2] = [("Home", "/"), ("Search", "/search")];

const PERSONAL_LINKS: [(&str, &str); 6] = [
    ("Subscriptions", "/subscriptions"),
    ("Liked Videos", "/liked-videos"),
    ("Watch History", "/history"),
    ("Playlists", "/playlists"),
    ("Upload", "/upload"),
    ("Dashboard", "/dashboard"),
];

/// Application sidebar. The personal section renders only once the session
/// resolves authenticated; signed-out visitors get a login prompt instead.
#[component]
pub fn Sidebar() -> impl IntoView {
    let session = expect_context::<Session>();

    view! {
        <aside class="sidebar">
            <nav class="sidebar__section">
                {PUBLIC_LINKS
                    .iter()
                    .map(|(label, path)| {
                        view! {
                            <a class="sidebar__link" href=*path>
                                {*label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
            <Show
                when=move || session.read().is_authenticated()
                fallback=|| {
                    view! {
                        <div class="sidebar__section sidebar__login-prompt">
                            <p>"Sign in to like videos, comment, and subscribe."</p>
                            <a class="btn btn--primary" href="/login">
                                "Login"
                            </a>
                        </div>
                    }
                }
            >
                <nav class="sidebar__section">
                    <span class="sidebar__heading">"You"</span>
                    {PERSONAL_LINKS
                        .iter()
                        .map(|(label, path)| {
                            view! {
                                <a class="sidebar__link" href=*path>
                                    {*label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
            </Show>
        </aside>
    }
}
