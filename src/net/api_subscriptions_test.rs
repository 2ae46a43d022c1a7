use super::*;

#[test]
fn subscription_paths_mirror_the_backend_routes() {
    assert_eq!(channel_subscription_path("ch1"), "/subscriptions/c/ch1");
    assert_eq!(subscriber_path("u1"), "/subscriptions/u/u1");
}
