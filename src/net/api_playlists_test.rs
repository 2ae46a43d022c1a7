use super::*;

#[test]
fn playlist_paths_mirror_the_backend_routes() {
    assert_eq!(playlist_path("p1"), "/playlist/p1");
    assert_eq!(user_playlists_path("u1"), "/playlist/user/u1");
    assert_eq!(playlist_membership_path("add", "v1", "p1"), "/playlist/add/v1/p1");
    assert_eq!(playlist_membership_path("remove", "v1", "p1"), "/playlist/remove/v1/p1");
}
