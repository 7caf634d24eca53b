// Copyright (c) 2026 The staffseq authors
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! The ordered sequence of staff lines plus song-level settings.
//!
//! This is the whole song as the editor sees it: the lines, the tempo, the
//! time signature, the soundset binding, and the per-instrument extension
//! flags. Index-based line access extends the sequence on demand so the
//! line collection never has gaps; explicit index-based deletes are the
//! only operations that fail on an out-of-range index.

use serde::{Deserialize, Serialize};

use super::line::StaffNoteLine;
use super::note::StaffNote;
use super::StaffError;
use crate::music::TimeSignature;
use crate::values::{DEFAULT_LINES_PER_SONG, DEFAULT_TEMPO, NUM_INSTRUMENTS};

/// A complete song: lines plus song-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffSequence {
    /// The lines of the song, index-addressed, no gaps
    lines: Vec<StaffNoteLine>,
    /// Tempo in beats per minute, always positive
    tempo: f64,
    /// Time signature
    time_signature: TimeSignature,
    /// Soundset bound to this song; empty means "inherit default"
    soundset: String,
    /// Which instrument slots render notes extended
    note_extensions: [bool; NUM_INSTRUMENTS],
}

impl Default for StaffSequence {
    /// An empty song: the default line count, default tempo, 4/4, no
    /// soundset binding, no extensions.
    fn default() -> Self {
        Self {
            lines: vec![StaffNoteLine::new(); DEFAULT_LINES_PER_SONG],
            tempo: DEFAULT_TEMPO,
            time_signature: TimeSignature::default(),
            soundset: String::new(),
            note_extensions: [false; NUM_INSTRUMENTS],
        }
    }
}

impl StaffSequence {
    /// Create an empty song with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty song with a specific starting line count
    pub fn with_line_count(count: usize) -> Self {
        Self {
            lines: vec![StaffNoteLine::new(); count],
            ..Self::default()
        }
    }

    /// Number of lines in the song
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the song has no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Grow the sequence with empty lines until it holds at least `count`
    /// lines. Never shrinks.
    pub fn ensure_line_count(&mut self, count: usize) {
        if count > self.lines.len() {
            tracing::debug!(from = self.lines.len(), to = count, "extending staff");
            self.lines.resize_with(count, StaffNoteLine::new);
        }
    }

    /// Get the line at index `i`, extending the sequence with empty lines
    /// as needed so the index is valid.
    pub fn line(&mut self, i: usize) -> &StaffNoteLine {
        self.ensure_line_count(i + 1);
        &self.lines[i]
    }

    /// Get the line at index `i` mutably, extending as needed
    pub fn line_mut(&mut self, i: usize) -> &mut StaffNoteLine {
        self.ensure_line_count(i + 1);
        &mut self.lines[i]
    }

    /// Get the line at index `i` without growing
    pub fn get_line(&self, i: usize) -> Option<&StaffNoteLine> {
        self.lines.get(i)
    }

    /// Overwrite the line at index `i`, extending as needed
    pub fn set_line(&mut self, i: usize, line: StaffNoteLine) {
        self.ensure_line_count(i + 1);
        self.lines[i] = line;
    }

    /// Append a line to the end of the song
    pub fn add_line(&mut self, line: StaffNoteLine) {
        self.lines.push(line);
    }

    /// Insert a line at index `i`, shifting later lines right. An index
    /// past the end appends.
    pub fn insert_line(&mut self, i: usize, line: StaffNoteLine) {
        if i <= self.lines.len() {
            self.lines.insert(i, line);
        } else {
            self.lines.push(line);
        }
    }

    /// Remove and return the line at index `i`
    pub fn delete_line_at(&mut self, i: usize) -> Result<StaffNoteLine, StaffError> {
        if i >= self.lines.len() {
            return Err(StaffError::IndexOutOfBounds {
                index: i,
                len: self.lines.len(),
            });
        }
        Ok(self.lines.remove(i))
    }

    /// Remove the first line equal to `line`. No-op when not present.
    pub fn delete_line(&mut self, line: &StaffNoteLine) {
        if let Some(pos) = self.lines.iter().position(|l| l == line) {
            self.lines.remove(pos);
        }
    }

    /// All lines in cursor order
    pub fn lines(&self) -> &[StaffNoteLine] {
        &self.lines
    }

    /// Place a note into the song, registering it on every line it
    /// covers.
    ///
    /// The note lands on its start line, the canonical owner for
    /// deletion, and is referenced from each later line it sounds
    /// through so playback sees held notes without scanning backwards.
    /// Grows the sequence to cover the note's full span. Returns `false`
    /// and leaves the song unchanged when the start line already holds a
    /// note in the same slot.
    pub fn place_note(&mut self, note: StaffNote) -> bool {
        let end = note.end_line();
        self.ensure_line_count(end + 1);
        if !self.lines[note.start_line].add_note(note) {
            return false;
        }
        for i in note.start_line + 1..=end {
            self.lines[i].add_note(note);
        }
        true
    }

    /// Remove a placed note from its start line and every line it
    /// covers. No-op for lines it is not present on.
    pub fn remove_note(&mut self, note: &StaffNote) {
        for i in note.start_line..=note.end_line() {
            if let Some(line) = self.lines.get_mut(i) {
                line.delete_note(note);
            }
        }
    }

    /// Tempo in beats per minute
    pub fn tempo(&self) -> f64 {
        self.tempo
    }

    /// Set the tempo. A non-positive or non-finite tempo is rejected and
    /// the current tempo is kept.
    pub fn set_tempo(&mut self, tempo: f64) -> Result<(), StaffError> {
        if !tempo.is_finite() || tempo <= 0.0 {
            return Err(StaffError::InvalidTempo(tempo));
        }
        self.tempo = tempo;
        Ok(())
    }

    /// Current time signature
    pub fn time_signature(&self) -> TimeSignature {
        self.time_signature
    }

    /// Set the time signature directly
    pub fn set_time_signature(&mut self, sig: TimeSignature) {
        self.time_signature = sig;
    }

    /// Set the time signature from its "top/bottom" textual form.
    ///
    /// Malformed text is an error. Well-formed text naming an unsupported
    /// meter falls back to 4/4 (see [`TimeSignature`]'s `FromStr`).
    pub fn set_time_signature_text(&mut self, text: &str) -> Result<(), StaffError> {
        self.time_signature = text.parse()?;
        Ok(())
    }

    /// Soundset bound to this song; empty means "inherit default"
    pub fn soundset(&self) -> &str {
        &self.soundset
    }

    /// Bind a soundset to this song
    pub fn set_soundset(&mut self, soundset: impl Into<String>) {
        self.soundset = soundset.into();
    }

    /// Per-instrument extension flags
    pub fn note_extensions(&self) -> &[bool; NUM_INSTRUMENTS] {
        &self.note_extensions
    }

    /// Set all extension flags from a slice. The slice length must equal
    /// the instrument count.
    pub fn set_note_extensions(&mut self, flags: &[bool]) -> Result<(), StaffError> {
        if flags.len() != NUM_INSTRUMENTS {
            return Err(StaffError::ExtensionCountMismatch {
                expected: NUM_INSTRUMENTS,
                got: flags.len(),
            });
        }
        self.note_extensions.copy_from_slice(flags);
        Ok(())
    }

    /// Copy extension flags from another song
    pub fn copy_note_extensions_from(&mut self, other: &StaffSequence) {
        self.note_extensions = other.note_extensions;
    }

    /// Set the extension flag for one instrument slot
    pub fn set_note_extension(
        &mut self,
        instrument: usize,
        extended: bool,
    ) -> Result<(), StaffError> {
        if instrument >= NUM_INSTRUMENTS {
            return Err(StaffError::IndexOutOfBounds {
                index: instrument,
                len: NUM_INSTRUMENTS,
            });
        }
        self.note_extensions[instrument] = extended;
        Ok(())
    }
}
