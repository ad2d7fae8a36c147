//! # authdash
//!
//! Leptos + WASM single-page client: a login form and a post-login dashboard
//! backed by a REST API.
//!
//! This crate contains the session store (token + profile persisted in
//! `localStorage`), the REST client, the login and dashboard pages, and the
//! notification stack. Browser-only code sits behind the `csr` feature so the
//! crate builds and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
pub(crate) mod test_helpers;

/// WASM entry point: install the panic hook, start console logging, and
/// mount the root component.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);
    log::info!("authdash starting");
    leptos::mount::mount_to_body(app::App);
}
