//! # client
//!
//! Leptos + WASM storefront for Cyberduck.
//!
//! This crate contains the pages, the floating cart widget, the gift-card
//! dialog, the browser `localStorage` backend for the `cart` crate, and the
//! checkout notification call. Cart rules live in `cart`; this crate only
//! wires them to the DOM.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {err}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
