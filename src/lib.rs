//! Real Consultants Mortgage - marketing site
//!
//! A single scroll-animated page served with Leptos SSR and hydrated in the
//! browser. Motion, tab and accordion state lives in [`core`] as plain Rust;
//! [`ui`] binds it to signals, observers and the DOM.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
