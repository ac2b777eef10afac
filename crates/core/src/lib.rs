//! Domain layer for the orchard service.
//!
//! Holds the shared id/timestamp types, the domain error type, and the
//! field constraints every persisted apple must satisfy. No I/O lives here.

pub mod apple;
pub mod error;
pub mod types;
