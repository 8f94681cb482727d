//! # client
//!
//! Leptos + WASM frontend for the Sakaai quiz simulator.
//!
//! This crate contains the layout shell, pages, question views, client-side
//! stores (theme, toasts, quiz history), browser persistence helpers, and the
//! REST client for the feedback survey. The server crate renders `app::App`
//! via SSR; the `hydrate` entry point below attaches it in the browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
