//! # processor-ui
//!
//! Leptos + WASM frontend for the content processor service. Users submit
//! short text payloads; the page tracks each submission's asynchronous
//! verdict (pending, processing, passed, failed) and pages through the
//! history of past submissions.
//!
//! This crate contains pages, components, application state, and the REST
//! client for the processing API. The service that actually validates and
//! processes content is a separate system; this UI only creates submissions
//! and polls their status.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the client-side app to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
