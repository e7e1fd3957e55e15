//! # client
//!
//! Leptos + WASM layer for the CMS admin "new entity" forms.
//!
//! This crate adapts the platform-independent `drafts` library to the
//! browser: a `localStorage` draft backend, timer-driven autosave and slug
//! check hooks, the draft recovery prompt and autosave controls, and REST
//! helpers for the slug, create, and media endpoints. Page layout, routing,
//! and the rich-text editor live in the host application.

pub mod components;
pub mod net;
pub mod state;
pub mod util;

/// Install the panic hook and route `log`/`tracing` events to the browser
/// console. Call once from the host application's hydrate entry point.
#[cfg(feature = "hydrate")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}
