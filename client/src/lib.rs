//! # client
//!
//! Leptos frontend for the Audibly marketing site.
//!
//! This crate contains the route table, the navigation shell (header and
//! footer), the decorative SVG primitives, and the four content pages plus
//! a not-found fallback. The `server` crate renders it with SSR; the
//! `hydrate` feature builds the WASM bundle that takes over in the browser.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod route;
pub mod state;

/// WASM entry point: attach the reactive app to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::debug!("hydrating audibly-site");
    leptos::mount::hydrate_body(app::App);
}
