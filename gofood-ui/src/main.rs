//! GoFood Dashboard
//!
//! Single-page food catalog manager built with Leptos (WASM).
//!
//! # Features
//!
//! - List every dish served by the GoFood API
//! - Add, edit and remove dishes through modal forms
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the `/foods` REST resource over HTTP; the base URL
//! defaults to `http://localhost:3333` and can be overridden with the
//! `gofood_api_url` local storage key.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));

    mount_to_body(|| view! { <app::App /> });
}
