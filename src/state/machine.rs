// Copyright (c) 2026 The staffseq authors
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! The shared state register.
//!
//! `StateMachine` holds the transient program-wide state every subsystem
//! consults: the current mode, the line cursor, the transport flags, the
//! pressed-key set, and the active directory and soundset. It is a flat
//! register: any value may be set from any prior value, and collaborators
//! are responsible for issuing sensible transitions.
//!
//! Each field is individually safe to read and write across threads (the
//! editor mutates while a playback or input context reads). There are no
//! cross-field transactions: a reader taking the mode and the cursor in
//! two reads may observe a torn pair when both change together. Fields
//! are logically independent enough that this is acceptable here.

use std::collections::HashSet;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicU8, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use crossterm::event::KeyCode;

use super::program_state::ProgramState;
use crate::music::TimeSignature;
use crate::values::{DEFAULT_SOUNDSET, DEFAULT_TEMPO, NUM_INSTRUMENTS};

/// Program-wide transient state, shared by reference between subsystems
#[derive(Debug)]
pub struct StateMachine {
    /// Current mode, stored as a `ProgramState` discriminant
    state: AtomicU8,
    /// Current time signature, stored as a `TimeSignature::ALL` index
    time_signature: AtomicU8,
    /// Current tempo, stored as `f64` bits
    tempo: AtomicU64,
    /// Current measure line the transport/editor is positioned at
    current_line: AtomicUsize,
    /// Whether the song has unsaved modifications
    song_modified: AtomicBool,
    /// Whether the arrangement has unsaved modifications
    arr_modified: AtomicBool,
    /// Loop button state
    loop_pressed: AtomicBool,
    /// Mute button state
    mute_pressed: AtomicBool,
    /// Low-A mute button state
    mute_a_pressed: AtomicBool,
    /// Clipboard button state
    clipboard_pressed: AtomicBool,
    /// Which instrument slots render notes extended
    note_extensions: Mutex<[bool; NUM_INSTRUMENTS]>,
    /// Keys currently held down
    buttons_pressed: Mutex<HashSet<KeyCode>>,
    /// Directory the last file dialog was in
    current_directory: Mutex<PathBuf>,
    /// Name of the currently loaded soundset
    current_soundset: Mutex<String>,
}

impl Default for StateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl StateMachine {
    /// Create a register with startup defaults: Editing mode, 4/4, the
    /// default tempo, cursor at line 0, all flags clear, and the process
    /// working directory.
    pub fn new() -> Self {
        let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            state: AtomicU8::new(ProgramState::default() as u8),
            time_signature: AtomicU8::new(TimeSignature::default().index() as u8),
            tempo: AtomicU64::new(DEFAULT_TEMPO.to_bits()),
            current_line: AtomicUsize::new(0),
            song_modified: AtomicBool::new(false),
            arr_modified: AtomicBool::new(false),
            loop_pressed: AtomicBool::new(false),
            mute_pressed: AtomicBool::new(false),
            mute_a_pressed: AtomicBool::new(false),
            clipboard_pressed: AtomicBool::new(false),
            note_extensions: Mutex::new([false; NUM_INSTRUMENTS]),
            buttons_pressed: Mutex::new(HashSet::new()),
            current_directory: Mutex::new(cwd),
            current_soundset: Mutex::new(DEFAULT_SOUNDSET.to_string()),
        }
    }

    /// Current mode
    pub fn state(&self) -> ProgramState {
        // The field only ever holds a valid discriminant.
        ProgramState::from_u8(self.state.load(Ordering::Relaxed)).unwrap_or_default()
    }

    /// Set the current mode. No transition table is enforced; any mode
    /// may follow any other.
    pub fn set_state(&self, state: ProgramState) {
        tracing::debug!(?state, "program state change");
        self.state.store(state as u8, Ordering::Relaxed);
    }

    /// Reset the mode to Editing
    pub fn reset_state(&self) {
        self.set_state(ProgramState::Editing);
    }

    /// Current time signature
    pub fn time_signature(&self) -> TimeSignature {
        TimeSignature::from_index(self.time_signature.load(Ordering::Relaxed) as usize)
            .unwrap_or_default()
    }

    /// Set the current time signature
    pub fn set_time_signature(&self, sig: TimeSignature) {
        self.time_signature.store(sig.index() as u8, Ordering::Relaxed);
    }

    /// Reset the time signature to 4/4
    pub fn reset_time_signature(&self) {
        self.set_time_signature(TimeSignature::FourFour);
    }

    /// Current tempo in beats per minute
    pub fn tempo(&self) -> f64 {
        f64::from_bits(self.tempo.load(Ordering::Relaxed))
    }

    /// Set the current tempo. The register stores whatever it is given;
    /// validation belongs to the song being edited.
    pub fn set_tempo(&self, tempo: f64) {
        self.tempo.store(tempo.to_bits(), Ordering::Relaxed);
    }

    /// Current measure line number (the cursor). Typically 0-383 for a
    /// default-length song.
    pub fn measure_line_num(&self) -> usize {
        self.current_line.load(Ordering::Relaxed)
    }

    /// Move the cursor
    pub fn set_measure_line_num(&self, line: usize) {
        self.current_line.store(line, Ordering::Relaxed);
    }

    /// Mark the song loop-enabled
    pub fn set_loop_pressed(&self) {
        self.loop_pressed.store(true, Ordering::Relaxed);
    }

    /// Mark the song not loop-enabled
    pub fn reset_loop_pressed(&self) {
        self.loop_pressed.store(false, Ordering::Relaxed);
    }

    /// Whether the loop button is pressed
    pub fn is_loop_pressed(&self) -> bool {
        self.loop_pressed.load(Ordering::Relaxed)
    }

    /// Mark mute notes enabled
    pub fn set_mute_pressed(&self) {
        self.mute_pressed.store(true, Ordering::Relaxed);
    }

    /// Mark mute notes disabled
    pub fn reset_mute_pressed(&self) {
        self.mute_pressed.store(false, Ordering::Relaxed);
    }

    /// Whether the mute button is pressed
    pub fn is_mute_pressed(&self) -> bool {
        self.mute_pressed.load(Ordering::Relaxed)
    }

    /// Set whether the low-A mute button is pressed
    pub fn set_mute_a_pressed(&self, pressed: bool) {
        self.mute_a_pressed.store(pressed, Ordering::Relaxed);
    }

    /// Whether the low-A mute button is pressed
    pub fn is_mute_a_pressed(&self) -> bool {
        self.mute_a_pressed.load(Ordering::Relaxed)
    }

    /// Mark the clipboard tool active
    pub fn set_clipboard_pressed(&self) {
        self.clipboard_pressed.store(true, Ordering::Relaxed);
    }

    /// Mark the clipboard tool inactive
    pub fn reset_clipboard_pressed(&self) {
        self.clipboard_pressed.store(false, Ordering::Relaxed);
    }

    /// Whether the clipboard tool is active
    pub fn is_clipboard_pressed(&self) -> bool {
        self.clipboard_pressed.load(Ordering::Relaxed)
    }

    /// Set whether the song has unsaved modifications
    pub fn set_song_modified(&self, modified: bool) {
        self.song_modified.store(modified, Ordering::Relaxed);
    }

    /// Whether the song has unsaved modifications
    pub fn is_song_modified(&self) -> bool {
        self.song_modified.load(Ordering::Relaxed)
    }

    /// Set whether the arrangement has unsaved modifications
    pub fn set_arr_modified(&self, modified: bool) {
        self.arr_modified.store(modified, Ordering::Relaxed);
    }

    /// Whether the arrangement has unsaved modifications
    pub fn is_arr_modified(&self) -> bool {
        self.arr_modified.load(Ordering::Relaxed)
    }

    /// Set all per-instrument extension flags
    pub fn set_note_extensions(&self, flags: [bool; NUM_INSTRUMENTS]) {
        *self.lock_recovering(&self.note_extensions) = flags;
    }

    /// Snapshot of the per-instrument extension flags
    pub fn note_extensions(&self) -> [bool; NUM_INSTRUMENTS] {
        *self.lock_recovering(&self.note_extensions)
    }

    /// Record a key press
    pub fn press_key(&self, key: KeyCode) {
        self.lock_recovering(&self.buttons_pressed).insert(key);
    }

    /// Record a key release
    pub fn release_key(&self, key: KeyCode) {
        self.lock_recovering(&self.buttons_pressed).remove(&key);
    }

    /// Whether a key is currently held down
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.lock_recovering(&self.buttons_pressed).contains(&key)
    }

    /// Snapshot of the currently held keys
    pub fn buttons_pressed(&self) -> HashSet<KeyCode> {
        self.lock_recovering(&self.buttons_pressed).clone()
    }

    /// Release every held key
    pub fn clear_key_presses(&self) {
        self.lock_recovering(&self.buttons_pressed).clear();
    }

    /// Directory the last file dialog was in
    pub fn current_directory(&self) -> PathBuf {
        self.lock_recovering(&self.current_directory).clone()
    }

    /// Remember the active directory
    pub fn set_current_directory(&self, dir: impl AsRef<Path>) {
        *self.lock_recovering(&self.current_directory) = dir.as_ref().to_path_buf();
    }

    /// Name of the currently loaded soundset
    pub fn current_soundset(&self) -> String {
        self.lock_recovering(&self.current_soundset).clone()
    }

    /// Record the currently loaded soundset
    pub fn set_current_soundset(&self, soundset: impl Into<String>) {
        *self.lock_recovering(&self.current_soundset) = soundset.into();
    }

    /// Lock a field, recovering the data if a panicking writer poisoned
    /// the mutex. Register fields stay usable either way.
    fn lock_recovering<'a, T>(&self, mutex: &'a Mutex<T>) -> std::sync::MutexGuard<'a, T> {
        mutex.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let machine = StateMachine::new();
        assert_eq!(machine.state(), ProgramState::Editing);
        assert_eq!(machine.time_signature(), TimeSignature::FourFour);
        assert_eq!(machine.tempo(), DEFAULT_TEMPO);
        assert_eq!(machine.measure_line_num(), 0);
        assert!(!machine.is_loop_pressed());
        assert!(!machine.is_mute_pressed());
        assert!(!machine.is_mute_a_pressed());
        assert!(!machine.is_clipboard_pressed());
        assert!(!machine.is_song_modified());
        assert!(!machine.is_arr_modified());
        assert!(machine.buttons_pressed().is_empty());
        assert_eq!(machine.current_soundset(), DEFAULT_SOUNDSET);
    }

    #[test]
    fn test_state_transitions_unrestricted() {
        let machine = StateMachine::new();
        // Flat register: every mode reachable from every other.
        for from in ProgramState::ALL {
            for to in ProgramState::ALL {
                machine.set_state(from);
                machine.set_state(to);
                assert_eq!(machine.state(), to);
            }
        }
    }

    #[test]
    fn test_resets() {
        let machine = StateMachine::new();

        machine.set_state(ProgramState::ArrPlaying);
        machine.reset_state();
        assert_eq!(machine.state(), ProgramState::Editing);

        machine.set_time_signature(TimeSignature::SixEight);
        machine.reset_time_signature();
        assert_eq!(machine.time_signature(), TimeSignature::FourFour);
    }

    #[test]
    fn test_cursor_and_tempo() {
        let machine = StateMachine::new();
        machine.set_measure_line_num(47);
        assert_eq!(machine.measure_line_num(), 47);

        machine.set_tempo(180.0);
        assert_eq!(machine.tempo(), 180.0);
    }

    #[test]
    fn test_flags() {
        let machine = StateMachine::new();

        machine.set_loop_pressed();
        assert!(machine.is_loop_pressed());
        machine.reset_loop_pressed();
        assert!(!machine.is_loop_pressed());

        machine.set_mute_pressed();
        machine.set_mute_a_pressed(true);
        machine.set_clipboard_pressed();
        assert!(machine.is_mute_pressed());
        assert!(machine.is_mute_a_pressed());
        assert!(machine.is_clipboard_pressed());

        machine.set_song_modified(true);
        machine.set_arr_modified(true);
        assert!(machine.is_song_modified());
        assert!(machine.is_arr_modified());
        machine.set_song_modified(false);
        assert!(!machine.is_song_modified());
        assert!(machine.is_arr_modified());
    }

    #[test]
    fn test_pressed_keys() {
        let machine = StateMachine::new();

        machine.press_key(KeyCode::Char('a'));
        machine.press_key(KeyCode::Up);
        assert!(machine.is_key_pressed(KeyCode::Char('a')));
        assert_eq!(machine.buttons_pressed().len(), 2);

        machine.release_key(KeyCode::Char('a'));
        assert!(!machine.is_key_pressed(KeyCode::Char('a')));

        // Releasing an unpressed key is a no-op.
        machine.release_key(KeyCode::Char('z'));
        assert_eq!(machine.buttons_pressed().len(), 1);

        machine.clear_key_presses();
        assert!(machine.buttons_pressed().is_empty());
    }

    #[test]
    fn test_note_extensions_snapshot() {
        let machine = StateMachine::new();
        let mut flags = [false; NUM_INSTRUMENTS];
        flags[0] = true;
        flags[NUM_INSTRUMENTS - 1] = true;

        machine.set_note_extensions(flags);
        assert_eq!(machine.note_extensions(), flags);
    }

    #[test]
    fn test_directory_and_soundset() {
        let machine = StateMachine::new();
        machine.set_current_directory("/tmp/songs");
        assert_eq!(machine.current_directory(), PathBuf::from("/tmp/songs"));

        machine.set_current_soundset("orchestra");
        assert_eq!(machine.current_soundset(), "orchestra");
    }

    #[test]
    fn test_independent_instances() {
        let a = StateMachine::new();
        let b = StateMachine::new();
        a.set_state(ProgramState::SongPlaying);
        assert_eq!(b.state(), ProgramState::Editing);
    }
}
