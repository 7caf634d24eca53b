// Copyright (c) 2026 The staffseq authors
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Program-wide constants.
//!
//! These mirror the editor's fixed dimensions: the instrument palette size,
//! the default song length, and the defaults a fresh song starts with.

/// Number of instrument slots in the palette.
pub const NUM_INSTRUMENTS: usize = 19;

/// Default number of staff lines in a new song (96 measures of 4/4).
pub const DEFAULT_LINES_PER_SONG: usize = 384;

/// Default tempo for a new song, in beats per minute.
pub const DEFAULT_TEMPO: f64 = 240.0;

/// Default note velocity.
pub const DEFAULT_VELOCITY: u8 = 96;

/// Soundset loaded when a song does not bind one of its own.
pub const DEFAULT_SOUNDSET: &str = "soundset3";
