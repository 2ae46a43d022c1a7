use super::*;
use crate::util::storage::MemoryTokens;

fn alice() -> User {
    User {
        id: "u1".to_owned(),
        username: "alice".to_owned(),
        full_name: "Alice A".to_owned(),
        email: "alice@example.com".to_owned(),
        avatar: Some("old-url".to_owned()),
        cover_image: None,
    }
}

// =============================================================
// Startup / check resolution
// =============================================================

#[test]
fn starting_state_is_checking_and_unauthenticated() {
    let state = SessionState::starting();
    assert!(state.checking);
    assert!(!state.is_authenticated());
    assert_eq!(state.user, None);
}

#[test]
fn check_without_token_resolves_unauthenticated() {
    let mut state = SessionState::starting();
    resolve_unauthenticated(&mut state);
    assert_eq!(state, SessionState { user: None, checking: false });
}

#[test]
fn check_with_accepted_token_resolves_authenticated() {
    let mut state = SessionState::starting();
    resolve_authenticated(&mut state, alice());
    assert!(state.is_authenticated());
    assert!(!state.checking);
    assert_eq!(state.user.unwrap().username, "alice");
}

#[test]
fn rejected_token_is_removed_and_state_resolves_unauthenticated() {
    let store = MemoryTokens::with_token("expired");
    let mut state = SessionState::starting();
    clear_session(&mut state, &store);
    assert_eq!(store.load(), None);
    assert!(!state.is_authenticated());
    assert!(!state.checking);
}

// =============================================================
// Login
// =============================================================

#[test]
fn successful_login_stores_token_once_and_sets_user() {
    let store = MemoryTokens::default();
    let mut state = SessionState { user: None, checking: false };
    complete_login(&mut state, &store, alice(), "tok123");
    assert_eq!(store.load().as_deref(), Some("tok123"));
    assert_eq!(store.save_count(), 1);
    assert!(state.is_authenticated());
    assert_eq!(state.user.unwrap(), alice());
}

#[test]
fn token_persisted_by_login_is_what_a_fresh_check_presents() {
    let store = MemoryTokens::default();
    let mut state = SessionState { user: None, checking: false };
    complete_login(&mut state, &store, alice(), "tok123");

    // A fresh client instance starts from the stored token alone.
    let mut fresh = SessionState::starting();
    assert_eq!(store.load().as_deref(), Some("tok123"));
    resolve_authenticated(&mut fresh, alice());
    assert_eq!(fresh.user.unwrap().username, "alice");
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_clears_token_and_user() {
    let store = MemoryTokens::default();
    let mut state = SessionState { user: None, checking: false };
    complete_login(&mut state, &store, alice(), "tok123");

    clear_session(&mut state, &store);
    assert_eq!(store.load(), None);
    assert_eq!(state, SessionState { user: None, checking: false });
}

#[test]
fn logout_is_idempotent() {
    let store = MemoryTokens::with_token("tok123");
    let mut state = SessionState { user: Some(alice()), checking: false };

    clear_session(&mut state, &store);
    let after_first = state.clone();
    clear_session(&mut state, &store);

    assert_eq!(state, after_first);
    assert_eq!(store.load(), None);
}

#[test]
fn no_state_combines_stored_token_with_unauthenticated() {
    // Both reset paths clear storage before resetting state, so the
    // "token present but signed out" combination cannot survive either.
    let store = MemoryTokens::with_token("tok123");
    let mut state = SessionState { user: Some(alice()), checking: false };
    clear_session(&mut state, &store);
    assert!(store.load().is_none() && !state.is_authenticated());
}

// =============================================================
// update_user merge
// =============================================================

#[test]
fn merge_updates_only_the_given_fields() {
    let mut state = SessionState { user: Some(alice()), checking: false };
    let patch = UserPatch {
        avatar: Some("new-url".to_owned()),
        ..UserPatch::default()
    };
    merge_profile(&mut state, &patch);

    let user = state.user.unwrap();
    assert_eq!(user.avatar.as_deref(), Some("new-url"));
    assert_eq!(user.id, "u1");
    assert_eq!(user.username, "alice");
    assert_eq!(user.full_name, "Alice A");
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.cover_image, None);
}

#[test]
fn merge_without_user_is_a_noop() {
    let mut state = SessionState { user: None, checking: false };
    merge_profile(&mut state, &UserPatch { email: Some("x@y.z".to_owned()), ..UserPatch::default() });
    assert_eq!(state.user, None);
}

#[test]
fn patch_from_user_carries_every_mergeable_field() {
    let patch = UserPatch::from_user(&alice());
    assert_eq!(patch.full_name.as_deref(), Some("Alice A"));
    assert_eq!(patch.email.as_deref(), Some("alice@example.com"));
    assert_eq!(patch.avatar.as_deref(), Some("old-url"));
    assert_eq!(patch.cover_image, None);
}

// =============================================================
// Single-flight epoch guard
// =============================================================

#[test]
fn completion_from_a_superseded_operation_is_stale() {
    // Operation captured epoch 1, a newer call moved the counter to 2.
    assert!(is_stale(1, 2));
    assert!(!is_stale(2, 2));
}
