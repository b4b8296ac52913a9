//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod pqr;

pub use pqr::pqr_routes;
