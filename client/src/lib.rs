//! # zoetrope
//!
//! Leptos + WASM page hosting the rotating drawing surface.
//!
//! This crate contains the page shell, the control panel, and the
//! `Zoetrope` host component. Drawing state, rotation and the canvas
//! renderer live in the `canvas` crate; this crate wires DOM events and
//! the animation frame loop to it.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger init failed: {err}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
