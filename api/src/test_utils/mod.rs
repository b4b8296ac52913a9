//! Test utilities
//!
//! In-memory repository implementations and fixtures for unit testing.
//!
//! The in-memory repositories hold real configuration and apply the same
//! filters as the PostgreSQL adapters. Failure paths are tested with the
//! mockall-generated `Mock*Repository` types from `domain::ports`.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
