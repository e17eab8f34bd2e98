//! # artstore-client
//!
//! Leptos + WASM storefront for the ArtStore marketplace: feed, artwork
//! detail, cart and checkout, registration, profile and the owner dashboard.
//!
//! All business rules live in the REST backend. This crate holds pages,
//! components, client-side flow state, and the typed service layer that talks
//! to the backend.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
