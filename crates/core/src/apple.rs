//! Apple field constraints and validation.
//!
//! The same limits are mirrored by `CHECK` constraints on the `apples`
//! table; running these first gives callers a readable message instead of a
//! constraint violation.

use validator::{ValidateLength, ValidateUrl};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of an apple name, in characters.
pub const MAX_NAME_LENGTH: u64 = 100;

/// Maximum length of an apple color, in characters.
pub const MAX_COLOR_LENGTH: u64 = 100;

/// Maximum length of a photo URL, in characters.
pub const MAX_PHOTO_URL_LENGTH: u64 = 200;

/// URL schemes accepted for `photo_url`.
pub const ALLOWED_URL_SCHEMES: &[&str] = &["http", "https", "ftp", "ftps"];

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate an apple name (non-blank, <= 100 chars).
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    validate_text_field("Name", name, MAX_NAME_LENGTH)
}

/// Validate an apple color (non-blank, <= 100 chars).
pub fn validate_color(color: &str) -> Result<(), CoreError> {
    validate_text_field("Color", color, MAX_COLOR_LENGTH)
}

/// Validate a photo URL.
///
/// Must parse as a URL, use one of [`ALLOWED_URL_SCHEMES`] with an explicit
/// `://` authority, and be at most 200 characters long.
pub fn validate_photo_url(url: &str) -> Result<(), CoreError> {
    if url.trim().is_empty() {
        return Err(CoreError::Validation("Photo URL must not be empty".into()));
    }
    if !url.validate_length(None, Some(MAX_PHOTO_URL_LENGTH), None) {
        return Err(CoreError::Validation(format!(
            "Photo URL must be at most {MAX_PHOTO_URL_LENGTH} characters"
        )));
    }
    if !url.validate_url() {
        return Err(CoreError::Validation(format!(
            "Photo URL '{url}' is not a valid URL"
        )));
    }

    let scheme = url
        .split_once("://")
        .map(|(scheme, _)| scheme.to_ascii_lowercase());
    match scheme {
        Some(s) if ALLOWED_URL_SCHEMES.contains(&s.as_str()) => Ok(()),
        _ => Err(CoreError::Validation(format!(
            "Photo URL must use one of: {}",
            ALLOWED_URL_SCHEMES.join(", ")
        ))),
    }
}

/// Validate every field of an apple before it is written.
///
/// Stops at the first failing field.
pub fn validate_apple_fields(name: &str, color: &str, photo_url: &str) -> Result<(), CoreError> {
    validate_name(name)?;
    validate_color(color)?;
    validate_photo_url(photo_url)
}

fn validate_text_field(field: &str, value: &str, max: u64) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    // Counts characters, not bytes.
    if !value.validate_length(None, Some(max), None) {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}
