//! # videotube-client
//!
//! Leptos + WASM frontend for the VideoTube video-sharing platform.
//! The server is an external REST API mounted under `/api/v1`; this crate
//! contains pages, components, shared client state, the REST transport,
//! and the session manager that owns authentication.
//!
//! Two build targets share this source tree: `hydrate` (browser) performs
//! real HTTP and localStorage access, `ssr` renders the same tree on the
//! server with all browser effects stubbed out.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point for the browser build.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
