//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod apple_repo;

pub use apple_repo::{AppleRepo, AppleWriteError};
