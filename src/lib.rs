// Copyright (c) 2026 The staffseq authors
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! STAFFSEQ - Data model and global state for a staff-based step sequencer.
//!
//! A song is an ordered, index-addressed collection of staff lines (time
//! slices), each holding notes and event markers, plus song-level settings
//! (tempo, time signature, soundset binding, per-instrument extension flags).
//! A separate state register tracks transient editor/playback state shared
//! by the UI, playback, and persistence collaborators.
//!
//! This crate deliberately stops at the data boundary: no rendering, no
//! input dispatch, no audio scheduling, and no file format live here.

pub mod arrangement;
pub mod music;
pub mod staff;
pub mod state;
pub mod values;

pub use arrangement::{ArrangementList, ListBinding, SharedArrangementList};
pub use music::{InstrumentIndex, MidiPitch, TimeSignature};
pub use staff::{StaffError, StaffEvent, StaffNote, StaffNoteLine, StaffSequence};
pub use state::{ProgramState, StateMachine};
