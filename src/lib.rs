//! # session-gate
//!
//! Leptos + WASM session core for the single-page client.
//!
//! This crate decides whether the visitor is signed in: it keeps the backend
//! credential in `localStorage`, reads identity claims out of it, exchanges
//! email/password for a new credential, and gates protected routes until the
//! stored credential has been checked.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// Browser entry point: installs console logging and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
