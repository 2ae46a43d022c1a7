//! Subscription endpoints.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_subscriptions_test.rs"]
mod api_subscriptions_test;

use super::types::{ChannelSubscriber, Paged, Subscription};

#[cfg(any(test, feature = "hydrate"))]
fn channel_subscription_path(channel_id: &str) -> String {
    format!("/subscriptions/c/{channel_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn subscriber_path(subscriber_id: &str) -> String {
    format!("/subscriptions/u/{subscriber_id}")
}

/// Follow or unfollow a channel via `POST /subscriptions/c/{channelId}`.
///
/// # Errors
///
/// Returns a toast-ready message on any failure.
pub async fn toggle_subscription(channel_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        super::api::post_empty(&channel_subscription_path(channel_id), "Failed to update subscription").await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = channel_id;
        Err("not available on server".to_owned())
    }
}

/// Followers of a channel via `GET /subscriptions/c/{channelId}`.
///
/// # Errors
///
/// Returns a toast-ready message on any failure.
pub async fn channel_subscribers(channel_id: &str) -> Result<Paged<ChannelSubscriber>, String> {
    #[cfg(feature = "hydrate")]
    {
        super::api::get_data(&channel_subscription_path(channel_id), "Failed to fetch subscribers").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = channel_id;
        Err("not available on server".to_owned())
    }
}

/// Channels a user follows via `GET /subscriptions/u/{subscriberId}`.
///
/// # Errors
///
/// Returns a toast-ready message on any failure.
pub async fn subscribed_channels(subscriber_id: &str) -> Result<Paged<Subscription>, String> {
    #[cfg(feature = "hydrate")]
    {
        super::api::get_data(&subscriber_path(subscriber_id), "Failed to fetch subscriptions").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = subscriber_id;
        Err("not available on server".to_owned())
    }
}
