use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Identifier for a session event.
///
/// Ids are stable for the lifetime of one in-memory store: fixture rows get
/// their 0-based position, manually created events draw from a monotonic
/// counter. Nothing survives a reload.
pub type EventId = u64;

/// A scheduled class occurrence with time bounds, room, teacher, and group
/// attribution, rendered as a calendar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionEvent {
    pub id: EventId,
    /// Course name shown as the event title. Empty for placeholder events.
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub room: Option<String>,
    /// Teacher identifier matched by the role filter.
    pub teacher: Option<String>,
    /// Student group identifier matched by the role filter.
    pub group: Option<String>,
    /// Set only when an event is dropped on the all-day slot.
    #[serde(default)]
    pub all_day: bool,
}

impl SessionEvent {
    /// Creates a manually added event.
    ///
    /// Ad-hoc events carry no room, teacher, or group attribution, so only
    /// the admin viewer sees them in a filtered projection.
    pub fn created(
        id: EventId,
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            start,
            end,
            room: None,
            teacher: None,
            group: None,
            all_day: false,
        }
    }

    /// Creates the partial event appended when a move or resize references
    /// an id that is no longer in the store. Carries only the fields the
    /// interaction supplied.
    pub(crate) fn placeholder(
        id: EventId,
        start: NaiveDateTime,
        end: NaiveDateTime,
        all_day: bool,
    ) -> Self {
        Self {
            id,
            title: String::new(),
            start,
            end,
            room: None,
            teacher: None,
            group: None,
            all_day,
        }
    }

    /// Sets the room for this event.
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = Some(room.into());
        self
    }

    /// Sets the teacher attribution for this event.
    pub fn with_teacher(mut self, teacher: impl Into<String>) -> Self {
        self.teacher = Some(teacher.into());
        self
    }

    /// Sets the group attribution for this event.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn datetime(d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2022, 1, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_created_event_has_no_attribution() {
        let event = SessionEvent::created(7, "Study group", datetime(19, 8), datetime(19, 9));

        assert_eq!(event.id, 7);
        assert_eq!(event.title, "Study group");
        assert_eq!(event.room, None);
        assert_eq!(event.teacher, None);
        assert_eq!(event.group, None);
        assert!(!event.all_day);
    }

    #[test]
    fn test_event_builder() {
        let event = SessionEvent::created(0, "Math", datetime(19, 8), datetime(19, 9))
            .with_room("A1")
            .with_teacher("EL")
            .with_group("NoviaYr1");

        assert_eq!(event.room, Some("A1".to_string()));
        assert_eq!(event.teacher, Some("EL".to_string()));
        assert_eq!(event.group, Some("NoviaYr1".to_string()));
    }

    #[test]
    fn test_placeholder_is_empty_apart_from_supplied_fields() {
        let event = SessionEvent::placeholder(42, datetime(20, 10), datetime(20, 12), true);

        assert_eq!(event.id, 42);
        assert_eq!(event.title, "");
        assert_eq!(event.teacher, None);
        assert_eq!(event.group, None);
        assert!(event.all_day);
    }

    #[test]
    fn test_serializes_all_day_as_camel_case() {
        let event = SessionEvent::created(0, "Math", datetime(19, 8), datetime(19, 9));
        let json = serde_json::to_string(&event).unwrap();

        assert!(json.contains(r#""allDay":false"#), "got: {json}");
    }
}
