//! # client
//!
//! Leptos + WASM frontend of the notebook viewer.
//!
//! This crate contains the catalog and viewer pages, their components,
//! view state, the document fetch layer and the bridge to the in-browser
//! kernel bootstrap library. Shared data types live in the `notebook` crate.

pub mod app;
pub mod bridge;
pub mod components;
pub mod consts;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
