//! Browser layer for the Shei-deli recipe site.
//!
//! Enhances the server-rendered pages: card navigation, the three form
//! handlers, status banners, star ratings and live search. Page logic
//! lives in the `shei-deli` crate; this crate only touches the DOM.

pub mod app;
pub mod components;
pub mod dom;
pub mod forms;
pub mod http;
pub mod nav;

use wasm_bindgen::prelude::*;

/// Entry point for the WASM module.
#[wasm_bindgen(start)]
pub fn run_app() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    app::start();
}
