// Copyright (c) 2026 The staffseq authors
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! A line of notes on the staff.
//!
//! One line is one discrete time slice of the song. It owns the notes that
//! start (or sound) on it and any event markers attached to it. Order
//! within a line carries no meaning.

use serde::{Deserialize, Serialize};

use super::note::{StaffEvent, StaffNote};
use super::StaffError;

/// One time slice of the song
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaffNoteLine {
    /// Notes on this line
    notes: Vec<StaffNote>,
    /// Event markers on this line
    events: Vec<StaffEvent>,
}

impl StaffNoteLine {
    /// Create an empty line
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a note to this line.
    ///
    /// A note occupying the same slot (instrument, pitch, start line) as
    /// one already present is rejected; the call returns `false` and the
    /// line is unchanged. Duplicate musical events at the same slot are
    /// not meaningful.
    pub fn add_note(&mut self, note: StaffNote) -> bool {
        if self.notes.iter().any(|n| n.same_slot(&note)) {
            tracing::trace!(
                instrument = note.instrument,
                pitch = note.pitch,
                start_line = note.start_line,
                "rejected duplicate note"
            );
            return false;
        }
        self.notes.push(note);
        true
    }

    /// Add an event marker to this line
    pub fn add_event(&mut self, event: StaffEvent) {
        self.events.push(event);
    }

    /// Remove the note at a collection position
    pub fn delete_note_at(&mut self, index: usize) -> Result<StaffNote, StaffError> {
        if index >= self.notes.len() {
            return Err(StaffError::IndexOutOfBounds {
                index,
                len: self.notes.len(),
            });
        }
        Ok(self.notes.remove(index))
    }

    /// Remove the event at a collection position
    pub fn delete_event_at(&mut self, index: usize) -> Result<StaffEvent, StaffError> {
        if index >= self.events.len() {
            return Err(StaffError::IndexOutOfBounds {
                index,
                len: self.events.len(),
            });
        }
        Ok(self.events.remove(index))
    }

    /// Remove a note by identity. No-op when the note is not present.
    pub fn delete_note(&mut self, note: &StaffNote) {
        if let Some(pos) = self.notes.iter().position(|n| n == note) {
            self.notes.remove(pos);
        }
    }

    /// Remove an event by identity. No-op when the event is not present.
    pub fn delete_event(&mut self, event: &StaffEvent) {
        if let Some(pos) = self.events.iter().position(|e| e == event) {
            self.events.remove(pos);
        }
    }

    /// Notes on this line
    pub fn notes(&self) -> &[StaffNote] {
        &self.notes
    }

    /// Events on this line
    pub fn events(&self) -> &[StaffEvent] {
        &self.events
    }

    /// Whether this line holds no notes and no events
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty() && self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_read() {
        let mut line = StaffNoteLine::new();
        assert!(line.is_empty());

        assert!(line.add_note(StaffNote::new(0, 60, 0)));
        line.add_event(StaffEvent::Bookmark);

        assert_eq!(line.notes().len(), 1);
        assert_eq!(line.events(), &[StaffEvent::Bookmark]);
        assert!(!line.is_empty());
    }

    #[test]
    fn test_duplicate_slot_rejected() {
        let mut line = StaffNoteLine::new();
        assert!(line.add_note(StaffNote::new(0, 60, 0)));
        // Same slot, different velocity: still a duplicate.
        assert!(!line.add_note(StaffNote::new(0, 60, 0).with_volume(40)));
        assert_eq!(line.notes().len(), 1);

        // Different pitch is a different slot.
        assert!(line.add_note(StaffNote::new(0, 62, 0)));
        assert_eq!(line.notes().len(), 2);
    }

    #[test]
    fn test_delete_at_out_of_range() {
        let mut line = StaffNoteLine::new();
        line.add_note(StaffNote::new(0, 60, 0));

        let err = line.delete_note_at(1).unwrap_err();
        assert_eq!(err, StaffError::IndexOutOfBounds { index: 1, len: 1 });
        assert_eq!(line.notes().len(), 1);

        assert!(line.delete_event_at(0).is_err());
    }

    #[test]
    fn test_delete_at() {
        let mut line = StaffNoteLine::new();
        line.add_note(StaffNote::new(0, 60, 0));
        line.add_note(StaffNote::new(1, 62, 0));

        let removed = line.delete_note_at(0).unwrap();
        assert_eq!(removed.pitch, 60);
        assert_eq!(line.notes().len(), 1);
    }

    #[test]
    fn test_delete_by_identity_round_trip() {
        let mut line = StaffNoteLine::new();
        let note = StaffNote::new(3, 72, 10);

        assert!(line.add_note(note));
        line.delete_note(&note);
        assert!(line.is_empty());

        // Absent delete is a no-op, not an error.
        line.delete_note(&note);
        assert!(line.is_empty());
    }

    #[test]
    fn test_delete_event_by_identity() {
        let mut line = StaffNoteLine::new();
        line.add_event(StaffEvent::LoopStart);
        line.add_event(StaffEvent::LoopEnd);

        line.delete_event(&StaffEvent::LoopStart);
        assert_eq!(line.events(), &[StaffEvent::LoopEnd]);

        // Not present: no-op.
        line.delete_event(&StaffEvent::Bookmark);
        assert_eq!(line.events().len(), 1);
    }
}
