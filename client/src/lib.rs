//! # client
//!
//! Leptos frontend for the sleep-disorder classification landing site.
//!
//! The crate builds twice: with `ssr` it is linked into the `server` binary
//! to render HTML, and with `hydrate` it compiles to WASM and attaches event
//! handlers to that HTML in the browser. The only interactive state is which
//! modal (registration or login) is open; see [`state::modal`].

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
