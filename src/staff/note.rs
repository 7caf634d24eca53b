// Copyright (c) 2026 The staffseq authors
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Placed notes and event markers.
//!
//! A `StaffNote` is a pitched sound event with a start line, a duration in
//! lines, an instrument, and a velocity. A `StaffEvent` is a non-pitched
//! marker (bookmark, loop point, tempo change) attached to one line.

use serde::{Deserialize, Serialize};

use crate::music::{InstrumentIndex, MidiPitch};
use crate::values::DEFAULT_VELOCITY;

/// A note placed on the staff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffNote {
    /// Instrument slot this note plays on
    pub instrument: InstrumentIndex,
    /// MIDI pitch (0-127)
    pub pitch: MidiPitch,
    /// Line the note starts on; the canonical owning line for deletion
    pub start_line: usize,
    /// Length in lines (>= 1)
    pub duration_lines: u32,
    /// Velocity (0-127)
    pub volume: u8,
}

impl StaffNote {
    /// Create a one-line note with the default velocity
    pub fn new(instrument: InstrumentIndex, pitch: MidiPitch, start_line: usize) -> Self {
        Self {
            instrument,
            pitch,
            start_line,
            duration_lines: 1,
            volume: DEFAULT_VELOCITY,
        }
    }

    /// Builder: set duration in lines (clamped to at least 1)
    pub fn with_duration(mut self, lines: u32) -> Self {
        self.duration_lines = lines.max(1);
        self
    }

    /// Builder: set velocity
    pub fn with_volume(mut self, volume: u8) -> Self {
        self.volume = volume.min(127);
        self
    }

    /// Last line this note covers
    pub fn end_line(&self) -> usize {
        self.start_line + self.duration_lines.saturating_sub(1) as usize
    }

    /// Whether two notes occupy the same musical slot.
    ///
    /// Two notes with the same instrument, pitch, and start line are the
    /// same musical event regardless of duration or velocity; a line never
    /// holds both.
    pub fn same_slot(&self, other: &StaffNote) -> bool {
        self.instrument == other.instrument
            && self.pitch == other.pitch
            && self.start_line == other.start_line
    }
}

/// A non-pitched marker attached to a line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StaffEvent {
    /// Navigation bookmark
    Bookmark,
    /// Start of a loop region
    LoopStart,
    /// End of a loop region
    LoopEnd,
    /// Tempo change taking effect at this line
    TempoChange(f64),
}
