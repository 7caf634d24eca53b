// Copyright (c) 2026 The staffseq authors
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Leaf musical value types.
//!
//! Provides the enumerated time signatures and the small identifier
//! aliases used throughout the staff data model.

pub mod time_signature;

pub use time_signature::{ParseTimeSignatureError, TimeSignature};

/// MIDI pitch type (0-127)
pub type MidiPitch = u8;

/// Index into the fixed instrument palette (0..NUM_INSTRUMENTS)
pub type InstrumentIndex = u8;
