use super::*;

// =============================================================
// ApiEnvelope
// =============================================================

#[test]
fn envelope_unwraps_data_and_message() {
    let body = r#"{"statusCode":200,"data":{"x":1},"message":"ok","success":true}"#;
    let envelope: ApiEnvelope<serde_json::Value> = serde_json::from_str(body).unwrap();
    assert_eq!(envelope.data, serde_json::json!({"x":1}));
    assert_eq!(envelope.message.as_deref(), Some("ok"));
    assert!(envelope.success);
}

#[test]
fn envelope_defaults_missing_message_and_success() {
    let body = r#"{"data":null}"#;
    let envelope: ApiEnvelope<serde_json::Value> = serde_json::from_str(body).unwrap();
    assert_eq!(envelope.message, None);
    assert!(envelope.success);
}

// =============================================================
// Paged
// =============================================================

#[test]
fn paged_reads_docs_and_next_page_flag() {
    let body = r#"{"docs":[{"_id":"v1","title":"t"}],"hasNextPage":true,"totalDocs":40}"#;
    let page: Paged<Video> = serde_json::from_str(body).unwrap();
    assert_eq!(page.docs.len(), 1);
    assert!(page.has_next_page);
}

#[test]
fn paged_defaults_to_empty_last_page() {
    let page: Paged<Video> = serde_json::from_str("{}").unwrap();
    assert!(page.docs.is_empty());
    assert!(!page.has_next_page);
}

// =============================================================
// User / LoginData
// =============================================================

#[test]
fn user_maps_mongo_id_and_camel_case() {
    let body = r#"{"_id":"u1","username":"alice","fullName":"Alice A","email":"a@b.com","avatar":"http://cdn/a.png"}"#;
    let user: User = serde_json::from_str(body).unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.full_name, "Alice A");
    assert_eq!(user.avatar.as_deref(), Some("http://cdn/a.png"));
    assert_eq!(user.cover_image, None);
}

#[test]
fn login_data_reads_access_token() {
    let body = r#"{"user":{"_id":"u1","username":"alice"},"accessToken":"tok123"}"#;
    let login: LoginData = serde_json::from_str(body).unwrap();
    assert_eq!(login.access_token, "tok123");
    assert_eq!(login.user.username, "alice");
}

// =============================================================
// File url tolerance
// =============================================================

#[test]
fn video_accepts_bare_string_media_urls() {
    let body = r#"{"_id":"v1","title":"t","thumbnail":"http://cdn/t.jpg","videoFile":"http://cdn/v.mp4"}"#;
    let video: Video = serde_json::from_str(body).unwrap();
    assert_eq!(video.thumbnail.as_deref(), Some("http://cdn/t.jpg"));
    assert_eq!(video.video_file.as_deref(), Some("http://cdn/v.mp4"));
}

#[test]
fn video_accepts_object_media_urls() {
    let body = r#"{"_id":"v1","title":"t","thumbnail":{"url":"http://cdn/t.jpg","public_id":"x"},"videoFile":{"url":"http://cdn/v.mp4"}}"#;
    let video: Video = serde_json::from_str(body).unwrap();
    assert_eq!(video.thumbnail.as_deref(), Some("http://cdn/t.jpg"));
    assert_eq!(video.video_file.as_deref(), Some("http://cdn/v.mp4"));
}

#[test]
fn null_media_url_reads_as_none() {
    let body = r#"{"_id":"v1","title":"t","thumbnail":null}"#;
    let video: Video = serde_json::from_str(body).unwrap();
    assert_eq!(video.thumbnail, None);
}

#[test]
fn numeric_media_url_is_rejected() {
    let body = r#"{"_id":"v1","title":"t","thumbnail":7}"#;
    assert!(serde_json::from_str::<Video>(body).is_err());
}

// =============================================================
// Video embeddings
// =============================================================

#[test]
fn video_channel_prefers_owner_details() {
    let body = r#"{
        "_id":"v1","title":"t",
        "owner":{"_id":"u1","username":"detail"},
        "ownerDetails":{"_id":"u2","username":"list"}
    }"#;
    let video: Video = serde_json::from_str(body).unwrap();
    assert_eq!(video.channel().unwrap().username, "list");
}

#[test]
fn video_channel_falls_back_to_owner() {
    let body = r#"{"_id":"v1","title":"t","owner":{"_id":"u1","username":"detail","subscribersCount":12,"isSubscribed":true}}"#;
    let video: Video = serde_json::from_str(body).unwrap();
    let channel = video.channel().unwrap();
    assert_eq!(channel.username, "detail");
    assert_eq!(channel.subscribers_count, 12);
    assert!(channel.is_subscribed);
}

#[test]
fn video_defaults_viewer_relative_fields() {
    let body = r#"{"_id":"v1","title":"t"}"#;
    let video: Video = serde_json::from_str(body).unwrap();
    assert_eq!(video.likes_count, 0);
    assert!(!video.is_liked);
    assert_eq!(video.is_published, None);
    assert!(video.channel().is_none());
}

// =============================================================
// ChannelProfile / Comment / Playlist / stats
// =============================================================

#[test]
fn channel_profile_reads_counters() {
    let body = r#"{
        "_id":"u1","username":"alice","fullName":"Alice",
        "subscribersCount":1200,"channelsSubscribedToCount":3,"isSubscribed":true
    }"#;
    let profile: ChannelProfile = serde_json::from_str(body).unwrap();
    assert_eq!(profile.subscribers_count, 1200);
    assert_eq!(profile.channels_subscribed_to_count, 3);
    assert!(profile.is_subscribed);
}

#[test]
fn comment_reads_owner_and_likes() {
    let body = r#"{"_id":"c1","content":"nice","createdAt":"2026-01-01T00:00:00Z","owner":{"_id":"u1","username":"bob"},"likesCount":2}"#;
    let comment: Comment = serde_json::from_str(body).unwrap();
    assert_eq!(comment.owner.unwrap().username, "bob");
    assert_eq!(comment.likes_count, 2);
}

#[test]
fn playlist_video_count_prefers_embedded_videos() {
    let body = r#"{"_id":"p1","name":"mix","totalVideos":9,"videos":[{"_id":"v1","title":"a"},{"_id":"v2","title":"b"}]}"#;
    let playlist: Playlist = serde_json::from_str(body).unwrap();
    assert_eq!(playlist.video_count(), 2);
}

#[test]
fn playlist_video_count_uses_total_when_not_embedded() {
    let body = r#"{"_id":"p1","name":"mix","totalVideos":9}"#;
    let playlist: Playlist = serde_json::from_str(body).unwrap();
    assert_eq!(playlist.video_count(), 9);
}

#[test]
fn channel_stats_default_to_zero() {
    let stats: ChannelStats = serde_json::from_str("{}").unwrap();
    assert_eq!(stats, ChannelStats::default());
    let body = r#"{"totalViews":10,"totalSubscribers":2,"totalVideos":3,"totalLikes":4}"#;
    let stats: ChannelStats = serde_json::from_str(body).unwrap();
    assert_eq!(stats.total_views, 10);
    assert_eq!(stats.total_likes, 4);
}

#[test]
fn channel_subscriber_reads_the_follower() {
    let body = r#"{"subscriber":{"_id":"u3","username":"fan"}}"#;
    let sub: ChannelSubscriber = serde_json::from_str(body).unwrap();
    assert_eq!(sub.subscriber.username, "fan");
}

#[test]
fn subscription_reads_followed_channel() {
    let body = r#"{"subscribedChannel":{"_id":"u9","username":"chan","fullName":"Chan Nel","avatar":{"url":"http://cdn/c.png"}}}"#;
    let sub: Subscription = serde_json::from_str(body).unwrap();
    assert_eq!(sub.subscribed_channel.username, "chan");
    assert_eq!(sub.subscribed_channel.avatar.as_deref(), Some("http://cdn/c.png"));
}
