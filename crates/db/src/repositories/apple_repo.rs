//! Repository for the `apples` table.

use orchard_core::error::CoreError;
use sqlx::PgPool;

use crate::models::apple::{Apple, CreateApple};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, color, photo_url, created_at, updated_at";

/// Errors raised when writing an apple.
#[derive(Debug, thiserror::Error)]
pub enum AppleWriteError {
    #[error(transparent)]
    Validation(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Provides read and insert operations for apples.
pub struct AppleRepo;

impl AppleRepo {
    /// Validate and insert a new apple, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateApple) -> Result<Apple, AppleWriteError> {
        input.validate()?;

        let query = format!(
            "INSERT INTO apples (name, color, photo_url) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        let apple = sqlx::query_as::<_, Apple>(&query)
            .bind(&input.name)
            .bind(&input.color)
            .bind(&input.photo_url)
            .fetch_one(pool)
            .await?;

        tracing::debug!(apple_id = apple.id, name = %apple, "Apple created");
        Ok(apple)
    }

    /// List every apple, oldest first.
    ///
    /// Ordered by id so repeated reads of an unchanged table are identical.
    pub async fn list(pool: &PgPool) -> Result<Vec<Apple>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM apples ORDER BY id");
        sqlx::query_as::<_, Apple>(&query).fetch_all(pool).await
    }
}
