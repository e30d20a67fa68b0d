//! # snippets-client
//!
//! WASM interaction layer for the snippet manager's server-rendered pages.
//!
//! Pages arrive fully rendered from the backend; this crate attaches behavior
//! to elements marked with `data-*` attributes: theme switching, relative
//! dates, syntax highlighting, code and markdown editors, tag and dropdown
//! widgets, clipboard buttons, favorite toggling, and keyboard shortcuts.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`bootstrap`] | Component setup order and the wasm start entry |
//! | [`components`] | Per-widget DOM adapters (browser-only parts behind `hydrate`) |
//! | [`config`] | Page-supplied client configuration |
//! | [`consts`] | Data-attribute names, element ids, class names |
//! | [`error`] | Crate error type |
//! | [`net`] | Backend HTTP calls and wire types |
//! | [`state`] | Theme, favorite, tag and language state |
//! | [`util`] | Text editing, timestamps, shortcuts, query parsing, storage |
//!
//! Everything outside the `hydrate` feature compiles natively so the state
//! machines and text handling are tested with plain `cargo test`.

pub mod bootstrap;
pub mod components;
pub mod config;
pub mod consts;
pub mod error;
pub mod net;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::*;

/// WASM entry point, run once when the module is instantiated.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let config = config::ClientConfig::load();
    let level = config.log_level.parse().unwrap_or(log::Level::Info);
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    bootstrap::run_when_ready(config);
}
