use std::sync::Arc;

use orchard_db::store::AppleStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, used for health checks.
    pub pool: orchard_db::DbPool,
    /// Record store the apple handlers read from.
    pub apples: Arc<dyn AppleStore>,
}
