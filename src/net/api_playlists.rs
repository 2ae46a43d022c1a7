//! Playlist endpoints.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_playlists_test.rs"]
mod api_playlists_test;

use super::types::Playlist;

#[cfg(any(test, feature = "hydrate"))]
fn playlist_path(playlist_id: &str) -> String {
    format!("/playlist/{playlist_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn user_playlists_path(user_id: &str) -> String {
    format!("/playlist/user/{user_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn playlist_membership_path(action: &str, video_id: &str, playlist_id: &str) -> String {
    format!("/playlist/{action}/{video_id}/{playlist_id}")
}

/// Create a playlist via `POST /playlist`.
///
/// # Errors
///
/// Returns the server-supplied message, or "Failed to create playlist".
pub async fn create_playlist(name: &str, description: &str) -> Result<Playlist, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "name": name, "description": description });
        super::api::post_json("/playlist", &body, "Failed to create playlist").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, description);
        Err("not available on server".to_owned())
    }
}

/// A user's playlists via `GET /playlist/user/{userId}`.
///
/// # Errors
///
/// Returns a toast-ready message on any failure.
pub async fn user_playlists(user_id: &str) -> Result<Vec<Playlist>, String> {
    #[cfg(feature = "hydrate")]
    {
        super::api::get_data(&user_playlists_path(user_id), "Failed to fetch playlists").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        Err("not available on server".to_owned())
    }
}

/// One playlist with its videos via `GET /playlist/{id}`.
///
/// # Errors
///
/// Returns a toast-ready message on any failure.
pub async fn playlist_by_id(playlist_id: &str) -> Result<Playlist, String> {
    #[cfg(feature = "hydrate")]
    {
        super::api::get_data(&playlist_path(playlist_id), "Failed to load playlist").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = playlist_id;
        Err("not available on server".to_owned())
    }
}

/// Rename/redescribe via `PATCH /playlist/{id}`.
///
/// # Errors
///
/// Returns the server-supplied message, or "Failed to update playlist".
pub async fn update_playlist(playlist_id: &str, name: &str, description: &str) -> Result<Playlist, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "name": name, "description": description });
        super::api::patch_json(&playlist_path(playlist_id), &body, "Failed to update playlist").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (playlist_id, name, description);
        Err("not available on server".to_owned())
    }
}

/// Delete via `DELETE /playlist/{id}`.
///
/// # Errors
///
/// Returns a toast-ready message on any failure.
pub async fn delete_playlist(playlist_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        super::api::delete_empty(&playlist_path(playlist_id), "Failed to delete playlist").await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = playlist_id;
        Err("not available on server".to_owned())
    }
}

/// Add a video via `PATCH /playlist/add/{videoId}/{playlistId}`.
///
/// # Errors
///
/// Returns a toast-ready message on any failure.
pub async fn add_video_to_playlist(video_id: &str, playlist_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        super::api::patch_empty(
            &playlist_membership_path("add", video_id, playlist_id),
            "Failed to add video to playlist",
        )
        .await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (video_id, playlist_id);
        Err("not available on server".to_owned())
    }
}

/// Remove a video via `PATCH /playlist/remove/{videoId}/{playlistId}`.
///
/// # Errors
///
/// Returns a toast-ready message on any failure.
pub async fn remove_video_from_playlist(video_id: &str, playlist_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        super::api::patch_empty(
            &playlist_membership_path("remove", video_id, playlist_id),
            "Failed to remove video from playlist",
        )
        .await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (video_id, playlist_id);
        Err("not available on server".to_owned())
    }
}
