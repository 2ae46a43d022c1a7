//! Profile page: account details, password change, and image updates.
//!
//! Remote writes happen first; only the returned profile is merged into
//! the session afterwards via `update_user`.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::state::session::Session;
use crate::state::toast::Toasts;

fn validate_account(full_name: &str, email: &str) -> Result<(String, String), &'static str> {
    let full_name = full_name.trim();
    if full_name.len() < 2 {
        return Err("Name must be at least 2 characters");
    }
    let email = email.trim();
    if !email.contains('@') {
        return Err("Invalid email address");
    }
    Ok((full_name.to_owned(), email.to_owned()))
}

fn validate_password_change(
    current: &str,
    new_password: &str,
    confirm: &str,
) -> Result<(), &'static str> {
    if current.is_empty() {
        return Err("Current password is required");
    }
    if new_password.len() < 6 {
        return Err("Password must be at least 6 characters");
    }
    if confirm != new_password {
        return Err("Passwords do not match");
    }
    Ok(())
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<Session>();
    let toasts = expect_context::<Toasts>();

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let saving_account = RwSignal::new(false);

    let current_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let changing_password = RwSignal::new(false);

    let avatar_input = NodeRef::<leptos::html::Input>::new();
    let cover_input = NodeRef::<leptos::html::Input>::new();

    // Seed the form from the session once it is available.
    let seeded = RwSignal::new(false);
    Effect::new(move || {
        let Some(user) = session.read().user else {
            return;
        };
        if seeded.get() {
            return;
        }
        seeded.set(true);
        full_name.set(user.full_name);
        email.set(user.email);
    });

    let on_account_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving_account.get() {
            return;
        }
        let (full_name_value, email_value) = match validate_account(&full_name.get(), &email.get()) {
            Ok(values) => values,
            Err(message) => {
                toasts.error(message);
                return;
            }
        };
        saving_account.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_users::update_account(&full_name_value, &email_value).await {
                Ok(updated) => {
                    session.update_user(&crate::state::session::UserPatch::from_user(&updated));
                    toasts.success("Profile updated successfully");
                }
                Err(message) => toasts.error(&message),
            }
            saving_account.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (full_name_value, email_value, session);
            saving_account.set(false);
        }
    };

    let on_password_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if changing_password.get() {
            return;
        }
        if let Err(message) = validate_password_change(
            &current_password.get(),
            &new_password.get(),
            &confirm_password.get(),
        ) {
            toasts.error(message);
            return;
        }
        changing_password.set(true);
        let current = current_password.get();
        let next = new_password.get();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_users::change_password(&current, &next).await {
                Ok(()) => {
                    toasts.success("Password changed successfully");
                    current_password.set(String::new());
                    new_password.set(String::new());
                    confirm_password.set(String::new());
                }
                Err(message) => toasts.error(&message),
            }
            changing_password.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (current, next);
            changing_password.set(false);
        }
    };

    let on_avatar_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let Some(file) = crate::util::files::file_from_input(&ev) else {
                return;
            };
            let Ok(form) = web_sys::FormData::new() else {
                return;
            };
            let _ = form.append_with_blob("avatar", &file);
            leptos::task::spawn_local(async move {
                match crate::net::api_users::update_avatar(&form).await {
                    Ok(updated) => {
                        session.update_user(&crate::state::session::UserPatch {
                            avatar: updated.avatar,
                            ..Default::default()
                        });
                        toasts.success("Avatar updated successfully");
                    }
                    Err(message) => toasts.error(&message),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_cover_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let Some(file) = crate::util::files::file_from_input(&ev) else {
                return;
            };
            let Ok(form) = web_sys::FormData::new() else {
                return;
            };
            let _ = form.append_with_blob("coverImage", &file);
            leptos::task::spawn_local(async move {
                match crate::net::api_users::update_cover_image(&form).await {
                    Ok(updated) => {
                        session.update_user(&crate::state::session::UserPatch {
                            cover_image: updated.cover_image,
                            ..Default::default()
                        });
                        toasts.success("Cover image updated successfully");
                    }
                    Err(message) => toasts.error(&message),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let avatar_url = move || {
        session
            .read()
            .user
            .and_then(|user| user.avatar)
            .unwrap_or_default()
    };
    let cover_url = move || {
        session
            .read()
            .user
            .and_then(|user| user.cover_image)
            .unwrap_or_default()
    };

    view! {
        <div class="page profile">
            <div class="page__heading">
                <h1>"Your Profile"</h1>
                <p>"Manage your account and channel appearance"</p>
            </div>

            <section class="card profile__images">
                <div class="profile__cover">
                    <img src=cover_url alt="Channel cover"/>
                    <label class="btn btn--ghost profile__image-button">
                        "Change Cover"
                        <input
                            class="upload__file-input"
                            type="file"
                            accept="image/*"
                            node_ref=cover_input
                            on:change=on_cover_change
                        />
                    </label>
                </div>
                <div class="profile__avatar">
                    <img src=avatar_url alt="Avatar"/>
                    <label class="btn btn--ghost profile__image-button">
                        "Change Avatar"
                        <input
                            class="upload__file-input"
                            type="file"
                            accept="image/*"
                            node_ref=avatar_input
                            on:change=on_avatar_change
                        />
                    </label>
                </div>
            </section>

            <section class="card">
                <h2>"Account Details"</h2>
                <form class="profile__form" on:submit=on_account_submit>
                    <label class="profile__label">
                        "Full Name"
                        <input
                            class="profile__input"
                            type="text"
                            prop:value=move || full_name.get()
                            on:input=move |ev| full_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="profile__label">
                        "Email"
                        <input
                            class="profile__input"
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || saving_account.get()>
                        {move || if saving_account.get() { "Saving..." } else { "Save Changes" }}
                    </button>
                </form>
            </section>

            <section class="card">
                <h2>"Change Password"</h2>
                <form class="profile__form" on:submit=on_password_submit>
                    <label class="profile__label">
                        "Current Password"
                        <input
                            class="profile__input"
                            type="password"
                            prop:value=move || current_password.get()
                            on:input=move |ev| current_password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="profile__label">
                        "New Password"
                        <input
                            class="profile__input"
                            type="password"
                            prop:value=move || new_password.get()
                            on:input=move |ev| new_password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="profile__label">
                        "Confirm New Password"
                        <input
                            class="profile__input"
                            type="password"
                            prop:value=move || confirm_password.get()
                            on:input=move |ev| confirm_password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || changing_password.get()>
                        {move || if changing_password.get() { "Changing..." } else { "Change Password" }}
                    </button>
                </form>
            </section>
        </div>
    }
}
