//! Video catalog endpoints: listing, detail, upload, owner mutations,
//! and like toggles.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_videos_test.rs"]
mod api_videos_test;

use super::types::{LikedVideo, Paged, Video};

/// Query parameters accepted by `GET /videos`. Listings are always newest
/// first, matching every consumer of the endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct VideoQuery {
    pub page: u32,
    pub limit: u32,
    /// Full-text search term.
    pub query: Option<String>,
    /// Restrict to one uploader.
    pub user_id: Option<String>,
}

impl Default for VideoQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 12,
            query: None,
            user_id: None,
        }
    }
}

impl VideoQuery {
    /// The given page of the global listing.
    pub fn page(page: u32) -> Self {
        Self { page, ..Self::default() }
    }

    /// First page of results for a search term.
    pub fn search(term: &str) -> Self {
        Self {
            limit: 20,
            query: Some(term.to_owned()),
            ..Self::default()
        }
    }

    /// First page of one channel's uploads.
    pub fn by_user(user_id: &str) -> Self {
        Self {
            limit: 20,
            user_id: Some(user_id.to_owned()),
            ..Self::default()
        }
    }

    #[cfg(any(test, feature = "hydrate"))]
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
            ("sortBy", "createdAt".to_owned()),
            ("sortType", "desc".to_owned()),
        ];
        if let Some(query) = &self.query {
            pairs.push(("query", query.clone()));
        }
        if let Some(user_id) = &self.user_id {
            pairs.push(("userId", user_id.clone()));
        }
        pairs
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn videos_path(query: &VideoQuery) -> String {
    super::api::with_query("/videos", &query.to_pairs())
}

#[cfg(any(test, feature = "hydrate"))]
fn video_path(video_id: &str) -> String {
    format!("/videos/{video_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn toggle_publish_path(video_id: &str) -> String {
    format!("/videos/toggle/publish/{video_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn toggle_video_like_path(video_id: &str) -> String {
    format!("/likes/toggle/v/{video_id}")
}

/// One page of the catalog via `GET /videos`.
///
/// # Errors
///
/// Returns a toast-ready message on any failure.
pub async fn list_videos(query: &VideoQuery) -> Result<Paged<Video>, String> {
    #[cfg(feature = "hydrate")]
    {
        super::api::get_data(&videos_path(query), "Failed to fetch videos").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err("not available on server".to_owned())
    }
}

/// One video with owner and like details via `GET /videos/{id}`.
///
/// # Errors
///
/// Returns a toast-ready message on any failure.
pub async fn video_by_id(video_id: &str) -> Result<Video, String> {
    #[cfg(feature = "hydrate")]
    {
        super::api::get_data(&video_path(video_id), "Failed to load video").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = video_id;
        Err("not available on server".to_owned())
    }
}

/// Publish a new video via multipart `POST /videos`.
///
/// # Errors
///
/// Returns the server-supplied message, or "Failed to upload video".
#[cfg(feature = "hydrate")]
pub async fn upload_video(form: &web_sys::FormData) -> Result<Video, String> {
    super::api::post_form("/videos", form, "Failed to upload video").await
}

/// Edit title/description/thumbnail via multipart `PATCH /videos/{id}`.
///
/// # Errors
///
/// Returns the server-supplied message, or "Failed to update video".
#[cfg(feature = "hydrate")]
pub async fn update_video(video_id: &str, form: &web_sys::FormData) -> Result<Video, String> {
    super::api::patch_form(&video_path(video_id), form, "Failed to update video").await
}

/// Remove an owned video via `DELETE /videos/{id}`.
///
/// # Errors
///
/// Returns a toast-ready message on any failure.
pub async fn delete_video(video_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        super::api::delete_empty(&video_path(video_id), "Failed to delete video").await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = video_id;
        Err("not available on server".to_owned())
    }
}

/// Flip an owned video's publish state via `PATCH /videos/toggle/publish/{id}`.
///
/// # Errors
///
/// Returns a toast-ready message on any failure.
pub async fn toggle_publish(video_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        super::api::patch_empty(&toggle_publish_path(video_id), "Failed to update video status").await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = video_id;
        Err("not available on server".to_owned())
    }
}

/// Toggle the viewer's like on a video via `POST /likes/toggle/v/{id}`.
///
/// # Errors
///
/// Returns a toast-ready message on any failure.
pub async fn toggle_video_like(video_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        super::api::post_empty(&toggle_video_like_path(video_id), "Failed to like video").await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = video_id;
        Err("not available on server".to_owned())
    }
}

/// Videos the viewer has liked via `GET /likes/videos`.
///
/// # Errors
///
/// Returns a toast-ready message on any failure.
pub async fn liked_videos() -> Result<Vec<LikedVideo>, String> {
    #[cfg(feature = "hydrate")]
    {
        super::api::get_data("/likes/videos", "Failed to fetch liked videos").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
