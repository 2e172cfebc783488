//! # client
//!
//! Leptos + WASM front-end for the chat application: login, registration and
//! the chat landing page.
//!
//! This crate owns the auth-token lifecycle on the browser side. `net` talks
//! to the REST authentication API, `state` holds the explicit session object
//! (tokens in `localStorage` plus the mirrored `accessToken` cookie), and
//! `guard` is the pure route decision shared with the SSR host.

pub mod app;
pub mod guard;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
