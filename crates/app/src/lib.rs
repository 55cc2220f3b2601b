//! # shutterbook-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ServiceCatalog` — read access to the photography service records
//!   - `PaymentGateway` — open and look up checkout sessions at a provider
//! - Define **driving/inbound ports** as use-case structs:
//!   - `CatalogService` — list services, get one service
//!   - `PaymentService` — start a checkout for a service, verify a session
//! - Orchestrate domain objects without knowing *how* storage or payment IO works
//!
//! ## Dependency rule
//! Depends on `shutterbook-domain` only (plus `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
