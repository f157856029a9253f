//! # client
//!
//! Leptos + WASM frontend for the portfolio project gallery.
//!
//! This crate contains the gallery page, its card and navigation components,
//! the pure gallery state machine, and the browser helpers for viewport
//! tracking, reveal-on-scroll, and image fallback resolution. The `ssr`
//! feature renders the first desktop page on the server; the `hydrate`
//! feature attaches the browser wiring.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic and log hooks, then hydrate the
/// server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
