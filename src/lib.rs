// lib.rs - Root module for the movie_finder library
//
// The same crate builds the actix server (feature "ssr") and the WASM
// client (feature "hydrate").

/// The Leptos application: models, state, server functions and views
pub mod web_app;

/// Reusable database setup for tests and tools
#[cfg(feature = "ssr")]
pub mod fixtures;

/// WASM entry point, called by the hydration script
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(web_app::App);
}
