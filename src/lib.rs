//! # pycam-client
//!
//! Leptos + WASM front end for the PyCAM photo editor. Uploads a local
//! image, renders it on a canvas, round-trips effects through the server,
//! and manages the user's gallery of saved edits.
//!
//! All editor and gallery decisions live in `state::controller`; the
//! browser-facing runtime in `util::tasks` performs the side effects it
//! asks for. Everything outside the `csr` feature builds natively so the
//! decision layer can be tested with plain `cargo test`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger already installed: {e}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
