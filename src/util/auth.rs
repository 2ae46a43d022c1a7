//! Shared auth redirect helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route guard and the login page must agree on how the originally
//! requested location is carried through the `/login` round trip.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Login entry point with the original location preserved in the `from`
/// query parameter, so a successful login can return there.
pub fn login_redirect_path(from: &str) -> String {
    if from.is_empty() || from == "/" || from.starts_with("/login") {
        return "/login".to_owned();
    }
    format!("/login?from={}", urlencoding::encode(from))
}

/// Resolve the post-login destination from the `from` query parameter.
/// Only same-app absolute paths are honored; anything else falls back to `/`.
pub fn return_target(from_param: Option<&str>) -> String {
    let Some(raw) = from_param else {
        return "/".to_owned();
    };
    let decoded = urlencoding::decode(raw).map(|s| s.into_owned()).unwrap_or_default();
    if decoded.starts_with('/') && !decoded.starts_with("//") && !decoded.starts_with("/login") {
        decoded
    } else {
        "/".to_owned()
    }
}
