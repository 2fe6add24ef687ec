//! # wiretrace
//!
//! Leptos + WASM client for tracing wire connections in schematic PDFs.
//! The backend exposes two endpoints (`/api/preview`, `/api/trace`) that do
//! the heavy lifting (page rendering, model invocation); this crate owns the
//! interactive surface: the trace form, the preview panel, the single
//! authoritative connection list, its filtered table view, and CSV/TSV export.
//!
//! All state and controller logic lives in plain-Rust modules (`state`,
//! `net`, `util`) that compile and test natively; browser-only code is gated
//! behind the `csr` feature.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point; mounts the application into `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(crate::app::App);
}
