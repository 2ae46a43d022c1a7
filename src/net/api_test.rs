use super::*;

#[test]
fn endpoint_prefixes_the_api_mount() {
    assert_eq!(endpoint("/users/login"), "/api/v1/users/login");
    assert_eq!(endpoint("/videos"), "/api/v1/videos");
}

#[test]
fn with_query_keeps_pair_order_and_encodes_values() {
    let url = with_query(
        "/videos",
        &[("page", "2".to_owned()), ("query", "cats & dogs".to_owned())],
    );
    assert_eq!(url, "/videos?page=2&query=cats%20%26%20dogs");
}

#[test]
fn with_query_without_pairs_is_the_bare_path() {
    assert_eq!(with_query("/videos", &[]), "/videos");
}

#[test]
fn login_body_uses_email_for_identifiers_with_at() {
    let body = login_body("alice@example.com", "pw");
    assert_eq!(
        body,
        serde_json::json!({"email": "alice@example.com", "password": "pw"})
    );
}

#[test]
fn login_body_uses_username_otherwise() {
    let body = login_body("alice", "pw");
    assert_eq!(body, serde_json::json!({"username": "alice", "password": "pw"}));
}

#[test]
fn message_or_prefers_nonempty_server_message() {
    assert_eq!(message_or(Some("Invalid credentials".to_owned()), "Login failed"), "Invalid credentials");
}

#[test]
fn message_or_falls_back_on_missing_or_blank() {
    assert_eq!(message_or(None, "Login failed"), "Login failed");
    assert_eq!(message_or(Some("   ".to_owned()), "Login failed"), "Login failed");
}
