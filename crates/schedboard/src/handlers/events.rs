//! Calendar mutation handlers.

use chrono::NaiveDateTime;

use schedboard_core::session::{EventId, WriteOutcome};

use crate::prompt::TitlePrompt;
use crate::state::AppState;

/// Payload of a drag-and-drop interaction reported by the calendar widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropAction {
    pub event_id: EventId,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// True when the event landed on the all-day slot.
    pub dropped_on_all_day: bool,
}

/// Payload of a resize interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeAction {
    pub event_id: EventId,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// An empty time range selected on the calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotSelection {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl AppState {
    /// Applies a drag-and-drop move to the store.
    pub fn handle_event_drop(&self, action: DropAction) -> WriteOutcome {
        let outcome = self.store_mut().move_event(
            action.event_id,
            action.start,
            action.end,
            action.dropped_on_all_day,
        );
        tracing::debug!(event_id = action.event_id, outcome = ?outcome, "Applied event drop");
        outcome
    }

    /// Applies a resize to the store.
    pub fn handle_event_resize(&self, action: ResizeAction) -> WriteOutcome {
        let outcome =
            self.store_mut()
                .resize_event(action.event_id, action.start, action.end);
        tracing::debug!(event_id = action.event_id, outcome = ?outcome, "Applied event resize");
        outcome
    }

    /// Handles an empty-slot selection: asks the prompt for a title and
    /// creates the event when one is supplied.
    ///
    /// Returns the new event's id, or `None` when the prompt was cancelled
    /// or answered with a blank title. The prompt resolves before this
    /// returns; there is no pending state.
    pub fn handle_slot_select(
        &self,
        slot: SlotSelection,
        prompt: &dyn TitlePrompt,
    ) -> Option<EventId> {
        let title = prompt.request_title()?;
        self.store_mut().create_event(slot.start, slot.end, title)
    }
}
