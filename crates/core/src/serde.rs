//! Serde helper functions for fixture deserialization.
//!
//! The timetable fixture stores datetimes as local ISO-8601 strings and
//! uses empty strings where optional fields are absent.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};

/// Deserialize a local ISO-8601 datetime.
/// Accepts formats: YYYY-MM-DDTHH:MM:SS or YYYY-MM-DDTHH:MM
pub fn deserialize_datetime<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(&s, "%Y-%m-%dT%H:%M"))
        .map_err(|e| serde::de::Error::custom(format!("invalid session datetime {s:?}: {e}")))
}

/// Deserialize an optional string, treating empty strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}
