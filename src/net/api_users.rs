//! Account and channel endpoints.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_users_test.rs"]
mod api_users_test;

use super::types::{ChannelProfile, User, Video};

#[cfg(any(test, feature = "hydrate"))]
fn channel_path(username: &str) -> String {
    format!("/users/c/{username}")
}

/// A channel page profile via `GET /users/c/{username}`.
///
/// # Errors
///
/// Returns a toast-ready message on any failure.
pub async fn channel_profile(username: &str) -> Result<ChannelProfile, String> {
    #[cfg(feature = "hydrate")]
    {
        super::api::get_data(&channel_path(username), "Failed to load channel").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = username;
        Err("not available on server".to_owned())
    }
}

/// The viewer's watch history via `GET /users/history`.
///
/// # Errors
///
/// Returns a toast-ready message on any failure.
pub async fn watch_history() -> Result<Vec<Video>, String> {
    #[cfg(feature = "hydrate")]
    {
        super::api::get_data("/users/history", "Failed to fetch watch history").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Update display name/email via `PATCH /users/update-account`; returns the
/// updated profile for the caller to merge into the session.
///
/// # Errors
///
/// Returns the server-supplied message, or "Failed to update profile".
pub async fn update_account(full_name: &str, email: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "fullName": full_name, "email": email });
        super::api::patch_json("/users/update-account", &body, "Failed to update profile").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (full_name, email);
        Err("not available on server".to_owned())
    }
}

/// Replace the avatar via multipart `PATCH /users/avatar`.
///
/// # Errors
///
/// Returns the server-supplied message, or "Failed to update avatar".
#[cfg(feature = "hydrate")]
pub async fn update_avatar(form: &web_sys::FormData) -> Result<User, String> {
    super::api::patch_form("/users/avatar", form, "Failed to update avatar").await
}

/// Replace the cover image via multipart `PATCH /users/cover-image`.
///
/// # Errors
///
/// Returns the server-supplied message, or "Failed to update cover image".
#[cfg(feature = "hydrate")]
pub async fn update_cover_image(form: &web_sys::FormData) -> Result<User, String> {
    super::api::patch_form("/users/cover-image", form, "Failed to update cover image").await
}

/// Change the password via `POST /users/change-password`.
///
/// # Errors
///
/// Returns the server-supplied message (e.g. a rejected old password), or
/// "Failed to change password".
pub async fn change_password(old_password: &str, new_password: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "oldPassword": old_password, "newPassword": new_password });
        super::api::post_json::<serde_json::Value>("/users/change-password", &body, "Failed to change password")
            .await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (old_password, new_password);
        Err("not available on server".to_owned())
    }
}
