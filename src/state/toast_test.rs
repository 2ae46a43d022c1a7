use super::*;

#[test]
fn push_appends_with_kind_and_message() {
    let mut state = ToastState::default();
    state.push(ToastKind::Success, "saved");
    state.push(ToastKind::Error, "nope");
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[0].kind, ToastKind::Success);
    assert_eq!(state.toasts[0].message, "saved");
    assert_eq!(state.toasts[1].kind, ToastKind::Error);
}

#[test]
fn push_assigns_unique_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "one");
    let b = state.push(ToastKind::Success, "two");
    assert_ne!(a, b);
}

#[test]
fn dismiss_removes_only_the_matching_toast() {
    let mut state = ToastState::default();
    let first = state.push(ToastKind::Success, "one");
    state.push(ToastKind::Error, "two");
    state.dismiss(&first);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].message, "two");
}

#[test]
fn dismiss_unknown_id_is_a_noop() {
    let mut state = ToastState::default();
    state.push(ToastKind::Success, "one");
    state.dismiss("missing");
    assert_eq!(state.toasts.len(), 1);
}
