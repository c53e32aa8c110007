//! profiles web server and UI.
//!
//! This crate provides the Leptos-based web interface for the profiles
//! application, along with the server-side session gate that keeps gated
//! pages from rendering for anonymous requests.

#![allow(non_snake_case)]

pub mod app;
pub mod pages;

#[cfg(feature = "ssr")]
pub mod auth;
#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod server;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
