//! # client
//!
//! Leptos frontend for the Cosplanner cosplay-project platform.
//!
//! This crate contains the app shell and routing, the Auth Gate guarding the
//! `/studio` subtree, session state, pages, and the REST helpers that call
//! the server's same-origin proxy endpoints.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
