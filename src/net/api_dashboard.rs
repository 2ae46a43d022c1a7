//! Creator dashboard endpoints.

#![allow(clippy::unused_async)]

use super::types::{ChannelStats, Paged, Video};

/// Aggregate channel statistics via `GET /dashboard/stats`.
///
/// # Errors
///
/// Returns a toast-ready message on any failure.
pub async fn channel_stats() -> Result<ChannelStats, String> {
    #[cfg(feature = "hydrate")]
    {
        super::api::get_data("/dashboard/stats", "Failed to fetch channel stats").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// The creator's own uploads (including unpublished) via
/// `GET /dashboard/videos`.
///
/// # Errors
///
/// Returns a toast-ready message on any failure.
pub async fn channel_videos() -> Result<Paged<Video>, String> {
    #[cfg(feature = "hydrate")]
    {
        let path = super::api::with_query(
            "/dashboard/videos",
            &[
                ("page", "1".to_owned()),
                ("limit", "10".to_owned()),
                ("sortBy", "createdAt".to_owned()),
                ("sortType", "desc".to_owned()),
            ],
        );
        super::api::get_data(&path, "Failed to fetch videos").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
