// Copyright (c) 2026 The staffseq authors
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Staff data model.
//!
//! This module provides the song structure the rest of the editor works
//! against:
//! - Notes and event markers placed on lines
//! - Lines as discrete time slices of the song
//! - The sequence of lines plus song-level settings
//!
//! Everything here is plain, synchronous data mutation. Collaborators that
//! need to observe changes wrap these types themselves.

pub mod line;
pub mod note;
pub mod sequence;

pub use line::StaffNoteLine;
pub use note::{StaffEvent, StaffNote};
pub use sequence::StaffSequence;

use crate::music::ParseTimeSignatureError;

/// Errors raised by staff data-model operations.
///
/// All of these are local, recoverable conditions. Callers decide whether
/// to prompt, log, or ignore.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StaffError {
    /// Index-based delete or access past the end of a collection
    #[error("index {index} out of bounds (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },
    /// Tempo must be a positive, finite number of beats per minute
    #[error("invalid tempo: {0}")]
    InvalidTempo(f64),
    /// Bulk extension-flag set with the wrong number of flags
    #[error("expected {expected} extension flags, got {got}")]
    ExtensionCountMismatch { expected: usize, got: usize },
    /// Unparsable time signature text
    #[error(transparent)]
    TimeSignatureParse(#[from] ParseTimeSignatureError),
}
