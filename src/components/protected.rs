//! Route guard for screens that require an authenticated session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Navigation decisions wait for the startup session check: while the
//! session is still checking, a neutral placeholder renders and no redirect
//! happens. Once resolved unauthenticated, the guard redirects to the login
//! entry point with the original location preserved so login can return.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::Session;
use crate::util::auth::login_redirect_path;

/// Renders `children` only for an authenticated session; read-only with
/// respect to the session itself.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    let location = use_location();

    Effect::new(move || {
        let state = session.read();
        if !state.checking && !state.is_authenticated() {
            let from = location.pathname.get_untracked();
            navigate(&login_redirect_path(&from), NavigateOptions::default());
        }
    });

    let children = StoredValue::new(children);
    view! {
        <Show
            when=move || {
                let state = session.read();
                !state.checking && state.is_authenticated()
            }
            fallback=move || {
                view! {
                    <div class="page-loading">
                        <div class="loading-spinner" aria-label="Loading"></div>
                    </div>
                }
            }
        >
            {move || children.with_value(|children| children())}
        </Show>
    }
}
