//! # gamerblog
//!
//! Leptos + WASM frontend for the gamer blog and shop.
//!
//! This crate contains pages, components, application state, REST types,
//! and the session layer that resolves who the browser user is. Every
//! screen is a thin view over the backend REST API; the only client-side
//! logic with real rules is session resolution and route guarding.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let level = config::ClientConfig::from_env().log_level;
    // Fails only when a logger is already installed.
    let _ = console_log::init_with_level(level);
    log::info!("hydrating gamerblog client");
    leptos::mount::hydrate_body(app::App);
}
