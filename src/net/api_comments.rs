//! Comment endpoints.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_comments_test.rs"]
mod api_comments_test;

use super::types::{Comment, Paged};

#[cfg(any(test, feature = "hydrate"))]
fn video_comments_path(video_id: &str) -> String {
    format!("/comments/{video_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn comment_path(comment_id: &str) -> String {
    format!("/comments/c/{comment_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn toggle_comment_like_path(comment_id: &str) -> String {
    format!("/likes/toggle/c/{comment_id}")
}

/// Comments on a video via `GET /comments/{videoId}`.
///
/// # Errors
///
/// Returns a toast-ready message on any failure.
pub async fn video_comments(video_id: &str) -> Result<Paged<Comment>, String> {
    #[cfg(feature = "hydrate")]
    {
        super::api::get_data(&video_comments_path(video_id), "Failed to fetch comments").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = video_id;
        Err("not available on server".to_owned())
    }
}

/// Post a comment via `POST /comments/{videoId}`.
///
/// # Errors
///
/// Returns the server-supplied message, or "Failed to add comment".
pub async fn add_comment(video_id: &str, content: &str) -> Result<Comment, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "content": content });
        super::api::post_json(&video_comments_path(video_id), &body, "Failed to add comment").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (video_id, content);
        Err("not available on server".to_owned())
    }
}

/// Edit an owned comment via `PATCH /comments/c/{commentId}`.
///
/// # Errors
///
/// Returns the server-supplied message, or "Failed to update comment".
pub async fn update_comment(comment_id: &str, content: &str) -> Result<Comment, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "content": content });
        super::api::patch_json(&comment_path(comment_id), &body, "Failed to update comment").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (comment_id, content);
        Err("not available on server".to_owned())
    }
}

/// Remove an owned comment via `DELETE /comments/c/{commentId}`.
///
/// # Errors
///
/// Returns a toast-ready message on any failure.
pub async fn delete_comment(comment_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        super::api::delete_empty(&comment_path(comment_id), "Failed to delete comment").await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = comment_id;
        Err("not available on server".to_owned())
    }
}

/// Toggle the viewer's like on a comment via `POST /likes/toggle/c/{commentId}`.
///
/// # Errors
///
/// Returns a toast-ready message on any failure.
pub async fn toggle_comment_like(comment_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        super::api::post_empty(&toggle_comment_like_path(comment_id), "Failed to like comment").await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = comment_id;
        Err("not available on server".to_owned())
    }
}
