use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::serde::{deserialize_datetime, deserialize_optional_string};

use super::error::FixtureError;
use super::types::{EventId, SessionEvent};

/// The static JSON data source populating the session store at load time.
///
/// Wire format: a `sessions` key holding one record per scheduled class.
#[derive(Debug, Clone, Deserialize)]
pub struct Fixture {
    pub sessions: Vec<SessionRecord>,
}

impl Fixture {
    /// Parses a fixture from JSON text, failing fast on malformed input.
    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        let fixture = serde_json::from_str(json)?;
        Ok(fixture)
    }
}

/// One raw session row from the fixture.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionRecord {
    /// Course name; becomes the event title.
    pub course: String,
    /// Session start, local time.
    #[serde(deserialize_with = "deserialize_datetime")]
    pub time: NaiveDateTime,
    /// Session end, local time.
    #[serde(deserialize_with = "deserialize_datetime")]
    pub end: NaiveDateTime,
    /// Room label; an empty string normalizes to `None`.
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub room: Option<String>,
    pub teacher: String,
    pub group: String,
}

impl SessionRecord {
    /// Converts the raw row into an event with the given id.
    pub(crate) fn into_event(self, id: EventId) -> SessionEvent {
        SessionEvent {
            id,
            title: self.course,
            start: self.time,
            end: self.end,
            room: self.room,
            teacher: Some(self.teacher),
            group: Some(self.group),
            all_day: false,
        }
    }
}
