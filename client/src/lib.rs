//! # client
//!
//! Leptos + WASM frontend for the job board: lists jobs fetched from the
//! backend, filters them client-side, keeps locally saved bookmarks, and
//! triggers on-demand scrapes.
//!
//! Built with `hydrate` for the browser bundle and `ssr` when linked into the
//! `jobboard` host for server rendering.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and hydrate the server markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
