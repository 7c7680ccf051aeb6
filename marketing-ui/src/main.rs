//! Marketing Bot Dashboard
//!
//! Content calendar and review tool built with Leptos (WASM).
//!
//! # Features
//!
//! - Dashboard with review stats and upcoming calendar entries
//! - Calendar planning with one-click generation
//! - Template-based content generation with compliance checks
//! - Review queue with approve/reject/publish workflow
//! - Knowledge base of firm facts, market data and brand rules
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All data lives in the browser's `localStorage`; there is no
//! server.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;
mod storage;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
