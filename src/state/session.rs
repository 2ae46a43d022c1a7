//! Session state and the session manager — the auth core.
//!
//! SYSTEM CONTEXT
//! ==============
//! Single source of truth for "who is logged in". Every mutation of the
//! session flows through the five operations on [`Session`]; route guards
//! and user-aware components observe it through the context-provided handle.
//!
//! DESIGN
//! ======
//! State transitions are pure functions over [`SessionState`]; persistence
//! happens only at the explicitly named points (`complete_login`,
//! `clear_session`) through the [`TokenStore`] adapter, so the whole
//! lifecycle is unit-testable without a browser. Overlapping async
//! operations are serialized by an epoch counter: a completion whose epoch
//! is no longer current is discarded.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::state::toast::Toasts;
use crate::util::storage::{BrowserTokens, TokenStore};

/// Authentication state observed by the rest of the client.
///
/// "Is authenticated" is derived from `user`, so the invariant
/// `authenticated ⇒ user present` holds by construction.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    /// The signed-in user's profile, when authenticated.
    pub user: Option<User>,
    /// True only until the startup session check resolves.
    pub checking: bool,
}

impl SessionState {
    /// State at application start, before the initial check resolves.
    pub fn starting() -> Self {
        Self { user: None, checking: true }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Partial profile for the local `update_user` merge. Absent fields keep
/// their current value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserPatch {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
    pub cover_image: Option<String>,
}

impl UserPatch {
    /// Patch carrying every mergeable field of a full profile, for callers
    /// that received the complete updated record from the server.
    pub fn from_user(user: &User) -> Self {
        Self {
            full_name: Some(user.full_name.clone()),
            email: Some(user.email.clone()),
            avatar: user.avatar.clone(),
            cover_image: user.cover_image.clone(),
        }
    }
}

// ---- pure transitions ------------------------------------------------

#[cfg(any(test, feature = "hydrate"))]
fn resolve_authenticated(state: &mut SessionState, user: User) {
    state.user = Some(user);
    state.checking = false;
}

fn resolve_unauthenticated(state: &mut SessionState) {
    state.user = None;
    state.checking = false;
}

fn merge_profile(state: &mut SessionState, patch: &UserPatch) {
    let Some(user) = state.user.as_mut() else {
        return;
    };
    if let Some(full_name) = &patch.full_name {
        user.full_name = full_name.clone();
    }
    if let Some(email) = &patch.email {
        user.email = email.clone();
    }
    if let Some(avatar) = &patch.avatar {
        user.avatar = Some(avatar.clone());
    }
    if let Some(cover_image) = &patch.cover_image {
        user.cover_image = Some(cover_image.clone());
    }
}

// ---- persistence points ----------------------------------------------

/// Exactly one token write, then authenticated state.
#[cfg(any(test, feature = "hydrate"))]
fn complete_login(state: &mut SessionState, store: &dyn TokenStore, user: User, token: &str) {
    store.save(token);
    resolve_authenticated(state, user);
}

/// Token gone and state unauthenticated, in that order. Used both for
/// explicit logout and for invalidated tokens; idempotent.
fn clear_session(state: &mut SessionState, store: &dyn TokenStore) {
    store.clear();
    resolve_unauthenticated(state);
}

/// An operation is stale once a newer session-mutating call has started.
fn is_stale(started: u64, current: u64) -> bool {
    started != current
}

// ---- the manager ------------------------------------------------------

/// Copyable handle to the one session per running client, provided via
/// context by the composition root.
#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<SessionState>,
    epoch: RwSignal<u64>,
    toasts: Toasts,
}

impl Session {
    pub fn new(toasts: Toasts) -> Self {
        Self {
            state: RwSignal::new(SessionState::starting()),
            epoch: RwSignal::new(0),
            toasts,
        }
    }

    /// Reactive read of the current session state.
    pub fn read(&self) -> SessionState {
        self.state.get()
    }

    /// Non-reactive read, for event handlers.
    pub fn read_untracked(&self) -> SessionState {
        self.state.get_untracked()
    }

    fn begin(&self) -> u64 {
        let next = self.epoch.get_untracked() + 1;
        self.epoch.set(next);
        next
    }

    fn superseded(&self, started: u64) -> bool {
        is_stale(started, self.epoch.get_untracked())
    }

    /// Resolve the stored token into a session, once, at application start.
    /// With no token present this resolves unauthenticated without touching
    /// the network; a rejected token is cleared so it cannot outlive its
    /// session.
    pub async fn check(self) {
        let started = self.begin();
        if BrowserTokens.load().is_none() {
            self.state.update(resolve_unauthenticated);
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let fetched = crate::net::api::fetch_current_user().await;
            if self.superseded(started) {
                return;
            }
            self.state.update(|s| match fetched {
                Some(user) => resolve_authenticated(s, user),
                None => clear_session(s, &BrowserTokens),
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            // No token can exist outside the browser.
            let _ = started;
            self.state.update(resolve_unauthenticated);
        }
    }

    /// Authenticate with the identifier (email or username) and password.
    /// On success the token is persisted and the session becomes
    /// authenticated; on failure the state is untouched and the
    /// server-supplied message (or a generic fallback) is returned.
    pub async fn login(self, identifier: &str, password: &str) -> Result<(), String> {
        #[cfg(feature = "hydrate")]
        {
            let started = self.begin();
            match crate::net::api::login_request(identifier, password).await {
                Ok(data) => {
                    if !self.superseded(started) {
                        self.state
                            .update(|s| complete_login(s, &BrowserTokens, data.user, &data.access_token));
                        self.toasts.success("Login successful!");
                    }
                    Ok(())
                }
                Err(message) => {
                    self.toasts.error(&message);
                    Err(message)
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (identifier, password);
            Err("not available on server".to_owned())
        }
    }

    /// Create an account from the multipart registration form. A successful
    /// registration does NOT sign the caller in; the caller is expected to
    /// redirect to the login page.
    #[cfg(feature = "hydrate")]
    pub async fn register(self, form: &web_sys::FormData) -> Result<(), String> {
        match crate::net::api::register_request(form).await {
            Ok(()) => {
                self.toasts.success("Registration successful! Please login.");
                Ok(())
            }
            Err(message) => {
                self.toasts.error(&message);
                Err(message)
            }
        }
    }

    /// Notify the server (best-effort), then always drop the token and
    /// reset to unauthenticated. Safe to call repeatedly.
    pub async fn logout(self) {
        let started = self.begin();
        #[cfg(feature = "hydrate")]
        if let Err(err) = crate::net::api::logout_request().await {
            log::warn!("server logout failed: {err}");
        }
        if self.superseded(started) {
            return;
        }
        self.state.update(|s| clear_session(s, &BrowserTokens));
        self.toasts.success("Logged out successfully");
    }

    /// Shallow-merge already-persisted profile fields into the session.
    /// Local only; callers persist remotely first.
    pub fn update_user(self, patch: &UserPatch) {
        self.state.update(|s| merge_profile(s, patch));
    }
}
