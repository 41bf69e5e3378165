use uuid::Uuid;
use validator::ValidationError;

use crate::error::{Error, Result};

/// Treats absent, empty and whitespace-only values alike.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// `validator` hook: whitespace-only text counts as missing.
pub fn validate_non_blank(value: &str) -> std::result::Result<(), ValidationError> {
    match non_blank(Some(value)) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("blank")),
    }
}

/// Parses an optional id parameter. Blank means "not given".
pub fn parse_optional_id(value: Option<&str>, field: &str) -> Result<Option<Uuid>> {
    match non_blank(value) {
        None => Ok(None),
        Some(raw) => Uuid::parse_str(raw)
            .map(Some)
            .map_err(|_| Error::BadRequest(format!("Invalid {}", field))),
    }
}
