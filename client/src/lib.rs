//! Breach-monitoring dashboard rendered with Leptos.
//!
//! The crate builds twice: `hydrate` produces the browser WASM bundle, `ssr`
//! lets the host render the HTML shell. Browser-only calls sit behind
//! `cfg(feature = "hydrate")` so the pure logic tests natively.

pub mod app;
pub mod components;
pub mod error;
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
