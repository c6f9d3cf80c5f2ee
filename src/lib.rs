//! # academic-events-web
//!
//! Leptos + WASM sign-in page for the Academic Events application.
//!
//! This crate contains the login page, its state reducer, the HTTP contract
//! for `POST /api/auth/login`, and the browser storage seam that keeps the
//! authenticated user record. Everything past the redirect to `/` (and the
//! auth endpoint itself) lives outside this crate.

pub mod app;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console diagnostics and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
