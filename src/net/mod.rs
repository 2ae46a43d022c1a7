//! Networking modules for the REST API boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the transport (bearer token, envelope, error extraction) and
//! the auth endpoints; the `api_*` siblings group the remaining endpoints
//! by resource; `types` defines the shared wire schema.

pub mod api;
pub mod api_comments;
pub mod api_dashboard;
pub mod api_playlists;
pub mod api_subscriptions;
pub mod api_users;
pub mod api_videos;
pub mod types;
