use super::*;

#[test]
fn subscribe_label_reflects_state() {
    assert_eq!(subscribe_label(false), "Subscribe");
    assert_eq!(subscribe_label(true), "Subscribed");
}

#[test]
fn owns_video_requires_a_matching_signed_in_viewer() {
    assert!(owns_video(Some("u1"), "u1"));
    assert!(!owns_video(Some("u2"), "u1"));
    assert!(!owns_video(None, "u1"));
}
