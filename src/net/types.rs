//! Wire DTOs for the REST API boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON (camelCase keys, Mongo-style `_id`)
//! so serde does the whole translation at the transport edge. Media
//! references are tolerated in both shapes the backend emits over its
//! lifetime: a bare URL string or an `{url: "..."}` object.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Standard `{statusCode, data, message, success}` wrapper around every
/// 2xx response body.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope<T> {
    /// The actual payload.
    pub data: T,
    /// Human-readable outcome message, when the backend supplies one.
    #[serde(default)]
    pub message: Option<String>,
    /// Whether the request succeeded; 2xx bodies default to `true`.
    #[serde(default = "default_true")]
    pub success: bool,
}

fn default_true() -> bool {
    true
}

/// One page of a paginated listing.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paged<T> {
    /// Items on this page.
    #[serde(default = "Vec::new")]
    pub docs: Vec<T>,
    /// Whether another page exists after this one.
    #[serde(default)]
    pub has_next_page: bool,
}

/// The authenticated user's own account record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Unique handle used in channel URLs.
    pub username: String,
    /// Display name.
    #[serde(default)]
    pub full_name: String,
    /// Account email address.
    #[serde(default)]
    pub email: String,
    /// Avatar image URL.
    #[serde(default, deserialize_with = "opt_file_url")]
    pub avatar: Option<String>,
    /// Channel cover image URL, if set.
    #[serde(default, deserialize_with = "opt_file_url")]
    pub cover_image: Option<String>,
}

/// Payload of a successful login.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    /// The signed-in user.
    pub user: User,
    /// Opaque bearer credential for subsequent requests.
    pub access_token: String,
}

/// Lightweight reference to a user, as embedded in comments, playlists,
/// and subscription listings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    /// Unique user identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Unique handle.
    pub username: String,
    /// Display name, when the aggregation includes it.
    #[serde(default)]
    pub full_name: Option<String>,
    /// Avatar image URL.
    #[serde(default, deserialize_with = "opt_file_url")]
    pub avatar: Option<String>,
}

/// A video's owning channel with viewer-relative subscription info.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoOwner {
    /// Unique user identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Unique handle.
    pub username: String,
    /// Avatar image URL.
    #[serde(default, deserialize_with = "opt_file_url")]
    pub avatar: Option<String>,
    /// Total subscribers of this channel.
    #[serde(default)]
    pub subscribers_count: u64,
    /// Whether the requesting viewer is subscribed.
    #[serde(default)]
    pub is_subscribed: bool,
}

/// A video as returned by list and detail endpoints.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    /// Unique video identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Title shown on cards and the watch page.
    pub title: String,
    /// Long-form description.
    #[serde(default)]
    pub description: String,
    /// Playable media URL.
    #[serde(default, deserialize_with = "opt_file_url")]
    pub video_file: Option<String>,
    /// Thumbnail image URL.
    #[serde(default, deserialize_with = "opt_file_url")]
    pub thumbnail: Option<String>,
    /// Duration in seconds.
    #[serde(default)]
    pub duration: f64,
    /// Total view count.
    #[serde(default)]
    pub views: u64,
    /// ISO 8601 creation timestamp.
    #[serde(default)]
    pub created_at: String,
    /// Publish state; only meaningful on the owner's dashboard listing.
    #[serde(default)]
    pub is_published: Option<bool>,
    /// Total likes on this video.
    #[serde(default)]
    pub likes_count: u64,
    /// Whether the requesting viewer has liked this video.
    #[serde(default)]
    pub is_liked: bool,
    /// Owning channel as embedded by the detail endpoint.
    #[serde(default)]
    pub owner: Option<VideoOwner>,
    /// Owning channel as embedded by list endpoints.
    #[serde(default)]
    pub owner_details: Option<VideoOwner>,
}

impl Video {
    /// Owning channel regardless of which embedding the endpoint used.
    pub fn channel(&self) -> Option<&VideoOwner> {
        self.owner_details.as_ref().or(self.owner.as_ref())
    }
}

/// A channel page profile with viewer-relative subscription info.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelProfile {
    /// Unique user identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Unique handle.
    pub username: String,
    /// Display name.
    #[serde(default)]
    pub full_name: String,
    /// Avatar image URL.
    #[serde(default, deserialize_with = "opt_file_url")]
    pub avatar: Option<String>,
    /// Cover image URL, if set.
    #[serde(default, deserialize_with = "opt_file_url")]
    pub cover_image: Option<String>,
    /// Total subscribers of this channel.
    #[serde(default)]
    pub subscribers_count: u64,
    /// Number of channels this user subscribes to.
    #[serde(default)]
    pub channels_subscribed_to_count: u64,
    /// Whether the requesting viewer is subscribed.
    #[serde(default)]
    pub is_subscribed: bool,
}

/// A comment on a video.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Unique comment identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Comment body.
    pub content: String,
    /// ISO 8601 creation timestamp.
    #[serde(default)]
    pub created_at: String,
    /// Comment author.
    #[serde(default)]
    pub owner: Option<UserRef>,
    /// Total likes on this comment.
    #[serde(default)]
    pub likes_count: u64,
}

/// A playlist, with contained videos on the detail endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    /// Unique playlist identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Playlist name.
    pub name: String,
    /// Playlist description.
    #[serde(default)]
    pub description: String,
    /// Video count as reported by list endpoints.
    #[serde(default)]
    pub total_videos: Option<u64>,
    /// Contained videos as embedded by the detail endpoint.
    #[serde(default)]
    pub videos: Option<Vec<Video>>,
    /// Playlist owner.
    #[serde(default)]
    pub owner: Option<UserRef>,
    /// ISO 8601 creation timestamp.
    #[serde(default)]
    pub created_at: String,
}

impl Playlist {
    /// Video count, preferring the embedded list when present.
    pub fn video_count(&self) -> u64 {
        self.videos
            .as_ref()
            .map(|v| v.len() as u64)
            .or(self.total_videos)
            .unwrap_or(0)
    }
}

/// Wrapper item of the liked-videos listing.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikedVideo {
    /// The liked video.
    pub liked_video: Video,
}

/// A channel the viewer subscribes to.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// The followed channel.
    pub subscribed_channel: UserRef,
}

/// A follower of a channel.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSubscriber {
    /// The subscribed user.
    pub subscriber: UserRef,
}

/// Aggregate creator-dashboard statistics.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStats {
    /// Views across all of the channel's videos.
    #[serde(default)]
    pub total_views: u64,
    /// Current subscriber count.
    #[serde(default)]
    pub total_subscribers: u64,
    /// Number of uploaded videos.
    #[serde(default)]
    pub total_videos: u64,
    /// Likes across all of the channel's videos.
    #[serde(default)]
    pub total_likes: u64,
}

/// Accept a media reference as either `"https://..."` or `{url: "https://..."}`.
fn opt_file_url<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(url) => Ok(Some(url)),
        serde_json::Value::Object(map) => match map.get("url") {
            Some(serde_json::Value::String(url)) => Ok(Some(url.clone())),
            Some(serde_json::Value::Null) | None => Ok(None),
            Some(_) => Err(D::Error::custom("expected string in file url field")),
        },
        _ => Err(D::Error::custom("expected string or {url} object")),
    }
}
