//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and shared surfaces while reading shared
//! state from Leptos context providers; only the session manager mutates
//! session state.

pub mod header;
pub mod layout;
pub mod protected;
pub mod sidebar;
pub mod toast_host;
pub mod video_card;
pub mod video_grid;
