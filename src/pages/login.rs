//! Login page: identifier (email or username) + password.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::state::session::Session;
use crate::util::auth::return_target;

/// Trim and require both form fields.
fn validate_login_input(identifier: &str, password: &str) -> Result<(String, String), &'static str> {
    let identifier = identifier.trim();
    if identifier.is_empty() || password.is_empty() {
        return Err("Enter your email or username and your password.");
    }
    Ok((identifier.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let query = use_query_map();

    let identifier = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form_error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (identifier_value, password_value) =
            match validate_login_input(&identifier.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    form_error.set(message.to_owned());
                    return;
                }
            };
        let target = return_target(query.get_untracked().get("from").as_deref());
        busy.set(true);
        form_error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match session.login(&identifier_value, &password_value).await {
                Ok(()) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(&target);
                    }
                }
                Err(message) => {
                    form_error.set(message);
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (identifier_value, password_value, target, session);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <a class="auth-card__logo" href="/">
                    <span class="header__logo-mark">"VT"</span>
                    <span class="header__logo-name">"VideoTube"</span>
                </a>
                <h1>"Sign in to your account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Email or Username"
                        <input
                            class="auth-form__input"
                            type="text"
                            placeholder="you@example.com"
                            prop:value=move || identifier.get()
                            on:input=move |ev| identifier.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            placeholder="Your password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || !form_error.get().is_empty()>
                    <p class="auth-form__error">{move || form_error.get()}</p>
                </Show>
                <p class="auth-card__switch">
                    "Don't have an account? " <a href="/register">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
