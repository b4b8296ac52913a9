//! Application layer
//!
//! Contains the PQR decision pipeline.
//! Pure classification and priority rules live next to the services that
//! coordinate them with the repository ports.

pub mod assignment;
pub mod classification_service;
pub mod classifier;
pub mod priority;
pub mod sla;

pub use classification_service::PqrClassificationService;
