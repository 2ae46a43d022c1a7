use super::*;

#[test]
fn redirect_path_encodes_the_original_location() {
    assert_eq!(login_redirect_path("/upload"), "/login?from=%2Fupload");
    assert_eq!(
        login_redirect_path("/playlist/abc?tab=1"),
        "/login?from=%2Fplaylist%2Fabc%3Ftab%3D1"
    );
}

#[test]
fn redirect_path_omits_trivial_locations() {
    assert_eq!(login_redirect_path(""), "/login");
    assert_eq!(login_redirect_path("/"), "/login");
    assert_eq!(login_redirect_path("/login"), "/login");
    assert_eq!(login_redirect_path("/login?from=%2Fupload"), "/login");
}

#[test]
fn return_target_round_trips_the_redirect_path() {
    assert_eq!(return_target(Some("%2Fupload")), "/upload");
    assert_eq!(return_target(Some("%2Fplaylist%2Fabc%3Ftab%3D1")), "/playlist/abc?tab=1");
}

#[test]
fn return_target_defaults_to_home() {
    assert_eq!(return_target(None), "/");
    assert_eq!(return_target(Some("")), "/");
}

#[test]
fn return_target_rejects_foreign_destinations() {
    assert_eq!(return_target(Some("https%3A%2F%2Fevil.example")), "/");
    assert_eq!(return_target(Some("%2F%2Fevil.example")), "/");
    assert_eq!(return_target(Some("%2Flogin")), "/");
}
