//! # qriosity
//!
//! Browser frontend for the Qriosity learning platform: landing and account
//! screens, a navigation shell, and the course / roadmap / daily-challenge
//! views. All business logic lives behind a remote GraphQL API and a hosted
//! identity provider; this crate is the UI plus the session plumbing that
//! decorates every remote call with the current identity.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;

/// WASM entry point for the client-side build.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
