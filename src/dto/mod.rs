pub mod application_dto;
pub mod auth_dto;
pub mod job_dto;
pub mod seed_dto;

use serde::{Deserialize, Deserializer};
use serde_json::Value as JsonValue;
use std::str::FromStr;

/// Accepts a number, a numeric string, or nothing. Dashboard forms post
/// numeric inputs as strings; a blank string counts as absent.
pub(crate) fn lenient_number<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = Option::<JsonValue>::deserialize(deserializer)?;
    let text = match raw {
        None | Some(JsonValue::Null) => return Ok(None),
        Some(JsonValue::Number(n)) => n.to_string(),
        Some(JsonValue::String(s)) if s.trim().is_empty() => return Ok(None),
        Some(JsonValue::String(s)) => s.trim().to_string(),
        Some(other) => {
            return Err(serde::de::Error::custom(format!(
                "expected a number, got {}",
                other
            )))
        }
    };
    text.parse::<T>()
        .map(Some)
        .map_err(|e| serde::de::Error::custom(format!("invalid number '{}': {}", text, e)))
}
