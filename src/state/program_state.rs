// Copyright (c) 2026 The staffseq authors
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Top-level editor modes.

use serde::{Deserialize, Serialize};

/// The mutually exclusive modes the editor can be in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ProgramState {
    /// Placing notes on the staff
    Editing = 0,
    /// Typing into a text field
    EditingText = 1,
    /// Playing back the current song
    SongPlaying = 2,
    /// Editing the arrangement list
    ArrEditing = 3,
    /// Playing back the arrangement
    ArrPlaying = 4,
    /// A menu dialog is open
    MenuOpen = 5,
}

impl ProgramState {
    /// All states, discriminant order
    pub const ALL: [ProgramState; 6] = [
        ProgramState::Editing,
        ProgramState::EditingText,
        ProgramState::SongPlaying,
        ProgramState::ArrEditing,
        ProgramState::ArrPlaying,
        ProgramState::MenuOpen,
    ];

    /// State for a stored discriminant, if valid
    pub fn from_u8(value: u8) -> Option<ProgramState> {
        ProgramState::ALL.get(value as usize).copied()
    }

    /// Whether this mode drives playback
    pub fn is_playing(self) -> bool {
        matches!(self, ProgramState::SongPlaying | ProgramState::ArrPlaying)
    }
}

impl Default for ProgramState {
    fn default() -> Self {
        ProgramState::Editing
    }
}
