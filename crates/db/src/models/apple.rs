//! Apple entity model, insert DTO, and the list serializer.

use std::fmt;

use orchard_core::apple::validate_apple_fields;
use orchard_core::error::CoreError;
use orchard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `apples` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Apple {
    pub id: DbId,
    pub name: String,
    pub color: String,
    pub photo_url: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl fmt::Display for Apple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// DTO for inserting a new apple.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateApple {
    pub name: String,
    pub color: String,
    pub photo_url: String,
}

impl CreateApple {
    /// Check the field constraints the `apples` table enforces.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_apple_fields(&self.name, &self.color, &self.photo_url)
    }
}

/// Wire shape of an apple in list responses.
///
/// Carries exactly `name`, `color` and `photo_url`; the id and timestamps
/// stay internal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppleSummary {
    pub name: String,
    pub color: String,
    pub photo_url: String,
}

impl From<&Apple> for AppleSummary {
    fn from(apple: &Apple) -> Self {
        Self {
            name: apple.name.clone(),
            color: apple.color.clone(),
            photo_url: apple.photo_url.clone(),
        }
    }
}

/// Convert apples into their wire shape, preserving iteration order.
///
/// Values are copied verbatim; rows read from the store already satisfy the
/// table constraints, so nothing is validated here.
pub fn serialize_apples<'a, I>(apples: I) -> Vec<AppleSummary>
where
    I: IntoIterator<Item = &'a Apple>,
{
    apples.into_iter().map(AppleSummary::from).collect()
}
