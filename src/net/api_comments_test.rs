use super::*;

#[test]
fn comment_paths_mirror_the_backend_routes() {
    assert_eq!(video_comments_path("v1"), "/comments/v1");
    assert_eq!(comment_path("c1"), "/comments/c/c1");
    assert_eq!(toggle_comment_like_path("c1"), "/likes/toggle/c/c1");
}
