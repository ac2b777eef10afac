//! The record store the HTTP layer reads apples from.
//!
//! Handlers depend on [`AppleStore`] rather than on a pool directly, so tests
//! can substitute an in-memory store.

use async_trait::async_trait;

use crate::models::apple::Apple;
use crate::repositories::AppleRepo;
use crate::DbPool;

/// Read access to the full set of stored apples.
#[async_trait]
pub trait AppleStore: Send + Sync {
    /// Fetch every apple currently stored.
    ///
    /// An empty table yields an empty vector, never an error.
    async fn list_all(&self) -> Result<Vec<Apple>, sqlx::Error>;
}

/// [`AppleStore`] backed by the PostgreSQL `apples` table.
#[derive(Debug, Clone)]
pub struct PgAppleStore {
    pool: DbPool,
}

impl PgAppleStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppleStore for PgAppleStore {
    async fn list_all(&self) -> Result<Vec<Apple>, sqlx::Error> {
        AppleRepo::list(&self.pool).await
    }
}
