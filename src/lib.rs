//! # roster-ui
//!
//! Leptos + WASM presentational components for the student-management admin
//! dashboard: the bulk-action toolbar, the advanced filter panel and the
//! student profile header.
//!
//! Components read props and forward user intent through callbacks. They own
//! no domain data; the hosting page does. Design-system primitives (buttons,
//! selects, inputs, icons) are injected through [`kit::UiKit`].

pub mod app;
pub mod components;
pub mod kit;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger not installed: {err}");
    }
    leptos::mount::hydrate_body(app::App);
}
