//! # shutterbook-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON API** the dashboard talks to
//!   (`/api/services`, `/api/stripe/create-checkout-session`,
//!   `/api/stripe/verify-payment`)
//! - Serve the **compiled dashboard** (Leptos/WASM bundle) from a `dist`
//!   directory, answering every client route with `index.html`
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into JSON responses
//!
//! ## Dependency rule
//! Depends on `shutterbook-app` (for port traits and services) and
//! `shutterbook-domain` (for the types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod spa;
pub mod state;
