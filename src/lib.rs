//! # attendance-client
//!
//! Leptos + WASM frontend for the school attendance administration system:
//! an admin dashboard (batches, students, messaging, attendance reports), a
//! check-in terminal, and the session guard that owns the authentication
//! token lifecycle. All data lives in the REST backend; this crate is the
//! UI layer plus a typed network client.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
