//! # reelview
//!
//! Leptos + WASM single-page client for a movie-browsing REST API.
//!
//! This crate contains pages, components, the route table, the REST client,
//! and the session lifecycle (token persistence, restore-on-boot, login and
//! logout). All browser I/O is gated behind the `csr` feature with native
//! stubs so the crate — and its tests — build without a browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod session;
