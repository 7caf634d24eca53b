// Copyright (c) 2026 The staffseq authors
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Arrangement list wiring.
//!
//! An arrangement is an ordered list of song titles played back to back.
//! The list itself lives here; the buttons that add to or remove from it
//! are external widgets that get bound to a shared handle and read/write
//! through it.

use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

use crate::staff::StaffError;

/// Shared handle widgets bind to
pub type SharedArrangementList = Arc<Mutex<ArrangementList>>;

/// An ordered list of song titles forming an arrangement
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrangementList {
    /// Arrangement name
    name: String,
    /// Song titles in playback order
    entries: Vec<String>,
}

impl ArrangementList {
    /// Create an empty arrangement
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Create an empty arrangement behind a shared handle
    pub fn shared(name: impl Into<String>) -> SharedArrangementList {
        Arc::new(Mutex::new(Self::new(name)))
    }

    /// Arrangement name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the arrangement
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Append a song title
    pub fn add(&mut self, title: impl Into<String>) {
        self.entries.push(title.into());
    }

    /// Insert a song title at a position. A position past the end appends.
    pub fn insert(&mut self, index: usize, title: impl Into<String>) {
        let title = title.into();
        if index <= self.entries.len() {
            self.entries.insert(index, title);
        } else {
            self.entries.push(title);
        }
    }

    /// Remove and return the title at a position
    pub fn remove_at(&mut self, index: usize) -> Result<String, StaffError> {
        if index >= self.entries.len() {
            return Err(StaffError::IndexOutOfBounds {
                index,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index))
    }

    /// Remove the first entry with a given title. No-op when absent.
    pub fn remove(&mut self, title: &str) {
        if let Some(pos) = self.entries.iter().position(|t| t == title) {
            self.entries.remove(pos);
        }
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Song titles in playback order
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the arrangement has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A widget's connection to an arrangement list.
///
/// Button widgets hold one of these; the application wires the list in
/// with [`ListBinding::set_list`] and the widget reads and writes through
/// the binding afterwards.
#[derive(Debug, Clone, Default)]
pub struct ListBinding {
    list: Option<SharedArrangementList>,
}

impl ListBinding {
    /// Create an unbound binding
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind this widget to a list
    pub fn set_list(&mut self, list: SharedArrangementList) {
        self.list = Some(list);
    }

    /// Whether a list has been wired in
    pub fn is_bound(&self) -> bool {
        self.list.is_some()
    }

    /// Run a closure against the bound list. Returns `None` when no list
    /// is bound.
    pub fn with_list<R>(&self, f: impl FnOnce(&mut ArrangementList) -> R) -> Option<R> {
        let list = self.list.as_ref()?;
        let mut guard = list.lock().unwrap_or_else(PoisonError::into_inner);
        Some(f(&mut guard))
    }
}
