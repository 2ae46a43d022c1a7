//! Registration page: profile fields plus avatar/cover image pickers.
//!
//! A successful registration deliberately does not sign the user in; the
//! page redirects to `/login` instead.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::state::session::Session;

/// Text fields of the registration form, as entered.
#[derive(Clone, Debug, Default, PartialEq)]
struct RegistrationInput {
    full_name: String,
    username: String,
    email: String,
    password: String,
    confirm_password: String,
}

/// First validation error of the form, or the cleaned input.
fn validate_registration(input: &RegistrationInput, has_avatar: bool) -> Result<RegistrationInput, &'static str> {
    let full_name = input.full_name.trim();
    if full_name.len() < 2 {
        return Err("Name must be at least 2 characters");
    }
    let username = input.username.trim();
    if username.len() < 3 {
        return Err("Username must be at least 3 characters");
    }
    if !username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err("Username can only contain letters, numbers, and underscores");
    }
    let email = input.email.trim();
    if !email_looks_valid(email) {
        return Err("Invalid email address");
    }
    if input.password.len() < 6 {
        return Err("Password must be at least 6 characters");
    }
    if input.confirm_password != input.password {
        return Err("Passwords do not match");
    }
    if !has_avatar {
        return Err("Avatar is required");
    }
    Ok(RegistrationInput {
        full_name: full_name.to_owned(),
        username: username.to_owned(),
        email: email.to_owned(),
        password: input.password.clone(),
        confirm_password: input.confirm_password.clone(),
    })
}

/// Shape check only; the backend is the authority on deliverability.
fn email_looks_valid(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<Session>();

    let full_name = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let form_error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let avatar_input = NodeRef::<leptos::html::Input>::new();
    let cover_input = NodeRef::<leptos::html::Input>::new();
    let avatar_preview = RwSignal::new(String::new());
    let cover_preview = RwSignal::new(String::new());

    let on_avatar_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(url) = crate::util::files::file_from_input(&ev)
                .as_ref()
                .and_then(crate::util::files::preview_url)
            {
                avatar_preview.set(url);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_cover_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(url) = crate::util::files::file_from_input(&ev)
                .as_ref()
                .and_then(crate::util::files::preview_url)
            {
                cover_preview.set(url);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let input = RegistrationInput {
            full_name: full_name.get(),
            username: username.get(),
            email: email.get(),
            password: password.get(),
            confirm_password: confirm_password.get(),
        };

        let has_avatar = {
            #[cfg(feature = "hydrate")]
            {
                crate::util::files::file_from_ref(&avatar_input).is_some()
            }
            #[cfg(not(feature = "hydrate"))]
            {
                false
            }
        };
        let cleaned = match validate_registration(&input, has_avatar) {
            Ok(cleaned) => cleaned,
            Err(message) => {
                form_error.set(message.to_owned());
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        {
            let avatar = crate::util::files::file_from_ref(&avatar_input);
            let Ok(form) = web_sys::FormData::new() else {
                return;
            };
            let _ = form.append_with_str("fullName", &cleaned.full_name);
            let _ = form.append_with_str("email", &cleaned.email);
            let _ = form.append_with_str("username", &cleaned.username);
            let _ = form.append_with_str("password", &cleaned.password);
            if let Some(avatar) = &avatar {
                let _ = form.append_with_blob("avatar", avatar);
            }
            if let Some(cover) = crate::util::files::file_from_ref(&cover_input) {
                let _ = form.append_with_blob("coverImage", &cover);
            }

            busy.set(true);
            form_error.set(String::new());
            leptos::task::spawn_local(async move {
                match session.register(&form).await {
                    Ok(()) => {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/login");
                        }
                    }
                    Err(message) => {
                        form_error.set(message);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (cleaned, session);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card auth-card--wide">
                <a class="auth-card__logo" href="/">
                    <span class="header__logo-mark">"VT"</span>
                    <span class="header__logo-name">"VideoTube"</span>
                </a>
                <h1>"Create your account"</h1>
                <p class="auth-card__subtitle">"Join our community and start sharing"</p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Full Name"
                        <input
                            class="auth-form__input"
                            type="text"
                            placeholder="Enter your full name"
                            prop:value=move || full_name.get()
                            on:input=move |ev| full_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Username"
                        <input
                            class="auth-form__input"
                            type="text"
                            placeholder="Choose a username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Email"
                        <input
                            class="auth-form__input"
                            type="email"
                            placeholder="Enter your email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            placeholder="Create a password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Confirm Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            placeholder="Confirm your password"
                            prop:value=move || confirm_password.get()
                            on:input=move |ev| confirm_password.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="auth-form__label">
                        "Avatar *"
                        <Show when=move || !avatar_preview.get().is_empty()>
                            <img class="auth-form__avatar-preview" src=move || avatar_preview.get() alt="Avatar preview"/>
                        </Show>
                        <input
                            class="auth-form__file"
                            type="file"
                            accept="image/*"
                            node_ref=avatar_input
                            on:change=on_avatar_change
                        />
                    </label>
                    <label class="auth-form__label">
                        "Cover Image (Optional)"
                        <Show when=move || !cover_preview.get().is_empty()>
                            <img class="auth-form__cover-preview" src=move || cover_preview.get() alt="Cover preview"/>
                        </Show>
                        <input
                            class="auth-form__file"
                            type="file"
                            accept="image/*"
                            node_ref=cover_input
                            on:change=on_cover_change
                        />
                    </label>

                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Create Account" }}
                    </button>
                </form>
                <Show when=move || !form_error.get().is_empty()>
                    <p class="auth-form__error">{move || form_error.get()}</p>
                </Show>
                <p class="auth-card__switch">
                    "Already have an account? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
