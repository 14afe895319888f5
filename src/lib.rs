//! # inkflow-client
//!
//! Leptos + WASM frontend for the Inkflow writing platform: articles,
//! categories, profile management, and the AI writing assistant.
//!
//! This crate contains pages, application state, the REST client with
//! bearer-token handling, and the route table with its auth guard. The
//! backend API is an external collaborator reached over HTTP.

pub mod app;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: hydrates the server-rendered page in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
