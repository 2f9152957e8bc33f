//! # crallabs-client
//!
//! Leptos frontend for the CralLabs documentation site: seven static pages
//! behind a collapsible sidebar, with a not-found fallback for every other
//! path.
//!
//! ARCHITECTURE
//! ============
//! `state` holds the pure route table, navigation resolver and sidebar state;
//! `content` holds the page fixtures; `components` and `pages` render them.
//! The same crate is compiled for the server (`ssr`) and the browser
//! (`hydrate`).

pub mod app;
pub mod components;
pub mod content;
pub mod icon;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point; hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
