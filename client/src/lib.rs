//! # client
//!
//! Leptos + WASM admin dashboard for the services marketplace.
//!
//! This crate contains pages, components, application state, the REST API
//! client and its wire types. The host binary renders it server-side and
//! the `hydrate` build takes over in the browser.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
