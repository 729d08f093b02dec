//! # warden-console
//!
//! Leptos + WASM frontend for the Warden access-management console.
//!
//! The crate's core is the session and authorization layer: token
//! persistence (`auth::store`), claims inspection (`auth::claims`),
//! role evaluation (`auth::roles`), the reactive session state
//! (`state::session`), and the identity-service gateway
//! (`net::auth_client`). Pages and components consume that layer
//! through context-provided signals.

pub mod app;
pub mod auth;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Client entry point: installs panic/log hooks and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
