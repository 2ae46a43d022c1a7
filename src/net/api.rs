//! REST transport core and auth/session endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the stored
//! access token attached as a bearer header and the backend's response
//! envelope unwrapped at this edge. Server-side (SSR): stubs returning
//! `None`/error since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<T, String>`/`Option` outputs instead of panics; the
//! `Err` string is the server-supplied message when one exists, otherwise
//! a per-operation fallback suitable for a toast.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{LoginData, User};
#[cfg(feature = "hydrate")]
use serde::de::DeserializeOwned;

/// Mount point of the backend REST API.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) const API_BASE: &str = "/api/v1";

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn endpoint(path: &str) -> String {
    format!("{API_BASE}{path}")
}

/// Append percent-encoded query parameters to `path`.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn with_query(path: &str, pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return path.to_owned();
    }
    let query = pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{path}?{query}")
}

/// Login body; an identifier containing `@` is submitted as the email.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn login_body(identifier: &str, password: &str) -> serde_json::Value {
    if identifier.contains('@') {
        serde_json::json!({ "email": identifier, "password": password })
    } else {
        serde_json::json!({ "username": identifier, "password": password })
    }
}

/// Prefer a non-empty server message over the fallback.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn message_or(message: Option<String>, fallback: &str) -> String {
    match message {
        Some(m) if !m.trim().is_empty() => m,
        _ => fallback.to_owned(),
    }
}

// ---- hydrate-only plumbing shared by all endpoint modules ------------

#[cfg(feature = "hydrate")]
use gloo_net::http::Request;

#[cfg(feature = "hydrate")]
fn bearer(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    use crate::util::storage::{BrowserTokens, TokenStore};
    match BrowserTokens.load() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn failure_message(resp: gloo_net::http::Response, fallback: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }
    let parsed = resp.json::<ErrorBody>().await.ok().and_then(|b| b.message);
    message_or(parsed, fallback)
}

/// Unwrap the `{data, ...}` envelope of a 2xx response, or extract the
/// failure message of anything else.
#[cfg(feature = "hydrate")]
pub(crate) async fn read_data<T: DeserializeOwned>(
    resp: gloo_net::http::Response,
    fallback: &str,
) -> Result<T, String> {
    if !resp.ok() {
        return Err(failure_message(resp, fallback).await);
    }
    resp.json::<super::types::ApiEnvelope<T>>()
        .await
        .map(|envelope| envelope.data)
        .map_err(|_| fallback.to_owned())
}

#[cfg(feature = "hydrate")]
pub(crate) async fn get_data<T: DeserializeOwned>(path: &str, fallback: &str) -> Result<T, String> {
    let resp = bearer(Request::get(&endpoint(path)))
        .send()
        .await
        .map_err(|_| fallback.to_owned())?;
    read_data(resp, fallback).await
}

#[cfg(feature = "hydrate")]
pub(crate) async fn post_json<T: DeserializeOwned>(
    path: &str,
    body: &serde_json::Value,
    fallback: &str,
) -> Result<T, String> {
    let request = bearer(Request::post(&endpoint(path)))
        .json(body)
        .map_err(|_| fallback.to_owned())?;
    let resp = request.send().await.map_err(|_| fallback.to_owned())?;
    read_data(resp, fallback).await
}

#[cfg(feature = "hydrate")]
pub(crate) async fn patch_json<T: DeserializeOwned>(
    path: &str,
    body: &serde_json::Value,
    fallback: &str,
) -> Result<T, String> {
    let request = bearer(Request::patch(&endpoint(path)))
        .json(body)
        .map_err(|_| fallback.to_owned())?;
    let resp = request.send().await.map_err(|_| fallback.to_owned())?;
    read_data(resp, fallback).await
}

/// Body-less POST, for toggles and notifications.
#[cfg(feature = "hydrate")]
pub(crate) async fn post_empty(path: &str, fallback: &str) -> Result<serde_json::Value, String> {
    let resp = bearer(Request::post(&endpoint(path)))
        .send()
        .await
        .map_err(|_| fallback.to_owned())?;
    read_data(resp, fallback).await
}

/// Body-less PATCH, for toggles and membership edits.
#[cfg(feature = "hydrate")]
pub(crate) async fn patch_empty(path: &str, fallback: &str) -> Result<serde_json::Value, String> {
    let resp = bearer(Request::patch(&endpoint(path)))
        .send()
        .await
        .map_err(|_| fallback.to_owned())?;
    read_data(resp, fallback).await
}

#[cfg(feature = "hydrate")]
pub(crate) async fn delete_empty(path: &str, fallback: &str) -> Result<serde_json::Value, String> {
    let resp = bearer(Request::delete(&endpoint(path)))
        .send()
        .await
        .map_err(|_| fallback.to_owned())?;
    read_data(resp, fallback).await
}

/// Multipart POST; the browser sets the boundary header itself.
#[cfg(feature = "hydrate")]
pub(crate) async fn post_form<T: DeserializeOwned>(
    path: &str,
    form: &web_sys::FormData,
    fallback: &str,
) -> Result<T, String> {
    let request = bearer(Request::post(&endpoint(path)))
        .body(form.clone())
        .map_err(|_| fallback.to_owned())?;
    let resp = request.send().await.map_err(|_| fallback.to_owned())?;
    read_data(resp, fallback).await
}

/// Multipart PATCH.
#[cfg(feature = "hydrate")]
pub(crate) async fn patch_form<T: DeserializeOwned>(
    path: &str,
    form: &web_sys::FormData,
    fallback: &str,
) -> Result<T, String> {
    let request = bearer(Request::patch(&endpoint(path)))
        .body(form.clone())
        .map_err(|_| fallback.to_owned())?;
    let resp = request.send().await.map_err(|_| fallback.to_owned())?;
    read_data(resp, fallback).await
}

// ---- auth/session endpoints ------------------------------------------

/// Authenticate via `POST /users/login`.
///
/// # Errors
///
/// Returns the server-supplied message, or "Login failed".
pub async fn login_request(identifier: &str, password: &str) -> Result<LoginData, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/users/login", &login_body(identifier, password), "Login failed").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (identifier, password);
        Err("not available on server".to_owned())
    }
}

/// Create an account via multipart `POST /users/register`.
///
/// # Errors
///
/// Returns the server-supplied message, or "Registration failed".
#[cfg(feature = "hydrate")]
pub async fn register_request(form: &web_sys::FormData) -> Result<(), String> {
    post_form::<serde_json::Value>("/users/register", form, "Registration failed").await?;
    Ok(())
}

/// Invalidate the server-side session via `POST /users/logout`.
///
/// # Errors
///
/// Returns an error string when the server call fails; callers treat this
/// as best-effort.
pub async fn logout_request() -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        post_empty("/users/logout", "Logout failed").await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch the user the stored token belongs to from `GET /users/current-user`.
/// Returns `None` if the token is rejected or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = bearer(Request::get(&endpoint("/users/current-user")))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<super::types::ApiEnvelope<User>>()
            .await
            .ok()
            .map(|envelope| envelope.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
