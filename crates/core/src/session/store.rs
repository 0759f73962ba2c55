//! In-memory session store.
//!
//! The store owns the canonical event list for one page session. All writes
//! are append-or-replace; there is no deletion, no rollback, and nothing is
//! persisted across reloads.

use chrono::NaiveDateTime;

use super::fixture::SessionRecord;
use super::types::{EventId, SessionEvent};

/// Outcome of a move or resize write.
///
/// A stale id is not an error: the interaction already happened on screen,
/// so the store keeps the result instead of rejecting it. `Recreated` makes
/// that soft-fail visible to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The referenced event existed and was updated in place.
    Updated,
    /// The referenced id was stale; a placeholder event was appended.
    Recreated,
}

/// Owns the mutable in-memory list of [`SessionEvent`].
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    events: Vec<SessionEvent>,
    next_id: EventId,
}

impl SessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads fixture records, assigning each event its 0-based position as
    /// id and seeding the id counter for manual creation.
    ///
    /// Calling this again is a full reset: prior ids and mutations are
    /// discarded.
    pub fn load(&mut self, records: Vec<SessionRecord>) {
        self.events = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| record.into_event(index as EventId))
            .collect();
        self.next_id = self.events.len() as EventId;

        // start <= end is not an invariant of the data; log and keep
        for event in &self.events {
            if event.start > event.end {
                tracing::warn!(event_id = event.id, title = %event.title, "Session ends before it starts");
            }
        }
        tracing::debug!(count = self.events.len(), "Loaded session fixture");
    }

    /// Applies a drag-move to the event with the given id.
    ///
    /// Replaces `start`/`end` in place and flips `all_day` on when a non
    /// all-day event lands on the all-day slot; every other field is kept.
    /// A stale id appends a placeholder instead of erroring.
    pub fn move_event(
        &mut self,
        id: EventId,
        new_start: NaiveDateTime,
        new_end: NaiveDateTime,
        dropped_on_all_day: bool,
    ) -> WriteOutcome {
        match self.events.iter_mut().find(|event| event.id == id) {
            Some(event) => {
                if !event.all_day && dropped_on_all_day {
                    event.all_day = true;
                }
                event.start = new_start;
                event.end = new_end;
                WriteOutcome::Updated
            }
            None => {
                tracing::warn!(event_id = id, "Move referenced a stale event id");
                self.events.push(SessionEvent::placeholder(
                    id,
                    new_start,
                    new_end,
                    dropped_on_all_day,
                ));
                WriteOutcome::Recreated
            }
        }
    }

    /// Applies a resize to the event with the given id.
    ///
    /// Touches only `start`/`end`; same stale-id policy as
    /// [`SessionStore::move_event`].
    pub fn resize_event(
        &mut self,
        id: EventId,
        new_start: NaiveDateTime,
        new_end: NaiveDateTime,
    ) -> WriteOutcome {
        match self.events.iter_mut().find(|event| event.id == id) {
            Some(event) => {
                event.start = new_start;
                event.end = new_end;
                WriteOutcome::Updated
            }
            None => {
                tracing::warn!(event_id = id, "Resize referenced a stale event id");
                self.events
                    .push(SessionEvent::placeholder(id, new_start, new_end, false));
                WriteOutcome::Recreated
            }
        }
    }

    /// Appends a manually created event and returns its fresh id.
    ///
    /// A blank title means the prompt was cancelled: nothing is created.
    pub fn create_event(
        &mut self,
        start: NaiveDateTime,
        end: NaiveDateTime,
        title: impl Into<String>,
    ) -> Option<EventId> {
        let title = title.into();
        if title.trim().is_empty() {
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;
        self.events.push(SessionEvent::created(id, title, start, end));
        tracing::debug!(event_id = id, "Created ad-hoc event");
        Some(id)
    }

    /// The full event list in its current order.
    pub fn events(&self) -> &[SessionEvent] {
        &self.events
    }

    /// Looks up an event by id.
    pub fn get(&self, id: EventId) -> Option<&SessionEvent> {
        self.events.iter().find(|event| event.id == id)
    }

    /// Number of events currently held.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True when the store holds no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
