//! Request handlers.
//!
//! Handlers read through the record store held in [`crate::state::AppState`]
//! and map errors via [`crate::error::AppError`].

pub mod apple;
