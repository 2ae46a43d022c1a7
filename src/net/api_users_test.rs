use super::*;

#[test]
fn channel_path_embeds_the_username() {
    assert_eq!(channel_path("alice"), "/users/c/alice");
}
