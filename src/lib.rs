//! washboard — browser client for the CarWashPe car-wash management SaaS.
//!
//! ARCHITECTURE
//! ============
//! A thin presentation layer over the REST backend. The session boundary
//! (session store, request gateway, role guard) lives in `state::session`,
//! `net::gateway` and `components::guard`; everything else is pages and
//! chrome on top of it.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: set up panic reporting and logging, then hydrate.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
