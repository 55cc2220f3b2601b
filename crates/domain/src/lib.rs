//! # shutterbook-domain
//!
//! Pure domain model for the shutterbook photography booking front.
//!
//! ## Responsibilities
//! - Foundational types: identifiers, error conventions, timestamps, prices
//! - Define **Service records** (photography offerings sourced from a catalog)
//! - Define the client-local **liked set** and **listing** view state
//! - Define the **client routes** the dashboard answers to
//! - Define **payment sessions** (checkout drafts, sessions, confirmations)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).
//! Everything here also compiles for `wasm32` so the dashboard can share it.

pub mod error;
pub mod id;
pub mod price;
pub mod time;

pub mod liked;
pub mod listing;
pub mod payment;
pub mod route;
pub mod service;
