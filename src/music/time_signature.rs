// Copyright (c) 2026 The staffseq authors
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Enumerated musical meters.
//!
//! The editor supports a fixed set of time signatures. Each variant knows
//! its top (beats per measure) and bottom (beat unit) and can be looked up
//! from its "top/bottom" textual form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A supported time signature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeSignature {
    TwoFour,
    ThreeFour,
    FourFour,
    ThreeEight,
    SixEight,
    TwelveEight,
}

impl TimeSignature {
    /// All supported signatures
    pub const ALL: [TimeSignature; 6] = [
        TimeSignature::TwoFour,
        TimeSignature::ThreeFour,
        TimeSignature::FourFour,
        TimeSignature::ThreeEight,
        TimeSignature::SixEight,
        TimeSignature::TwelveEight,
    ];

    /// Beats per measure
    pub fn top(self) -> u8 {
        match self {
            TimeSignature::TwoFour => 2,
            TimeSignature::ThreeFour => 3,
            TimeSignature::FourFour => 4,
            TimeSignature::ThreeEight => 3,
            TimeSignature::SixEight => 6,
            TimeSignature::TwelveEight => 12,
        }
    }

    /// Beat unit (4 = quarter note, 8 = eighth note)
    pub fn bottom(self) -> u8 {
        match self {
            TimeSignature::TwoFour => 4,
            TimeSignature::ThreeFour => 4,
            TimeSignature::FourFour => 4,
            TimeSignature::ThreeEight => 8,
            TimeSignature::SixEight => 8,
            TimeSignature::TwelveEight => 8,
        }
    }

    /// Look up the signature with an exact (top, bottom) match
    pub fn from_parts(top: u8, bottom: u8) -> Option<TimeSignature> {
        TimeSignature::ALL
            .iter()
            .copied()
            .find(|sig| sig.top() == top && sig.bottom() == bottom)
    }

    /// Position of this signature in [`TimeSignature::ALL`]
    pub fn index(self) -> usize {
        TimeSignature::ALL
            .iter()
            .position(|&sig| sig == self)
            .unwrap_or(0)
    }

    /// Signature at a given [`TimeSignature::ALL`] position, if valid
    pub fn from_index(index: usize) -> Option<TimeSignature> {
        TimeSignature::ALL.get(index).copied()
    }
}

impl Default for TimeSignature {
    fn default() -> Self {
        TimeSignature::FourFour
    }
}

impl fmt::Display for TimeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.top(), self.bottom())
    }
}

/// Error for a time signature string that is not of the "top/bottom" form
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed time signature: {0:?}")]
pub struct ParseTimeSignatureError(pub String);

impl FromStr for TimeSignature {
    type Err = ParseTimeSignatureError;

    /// Parse a "top/bottom" string.
    ///
    /// Malformed text (no '/', non-numeric parts) is an error. A
    /// well-formed pair with no enumerated match (e.g. "7/11") falls back
    /// to 4/4. The fallback preserves the editor's historical behavior
    /// when reading songs authored with unsupported meters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (top, bottom) = s
            .split_once('/')
            .ok_or_else(|| ParseTimeSignatureError(s.to_string()))?;
        let top: u8 = top
            .trim()
            .parse()
            .map_err(|_| ParseTimeSignatureError(s.to_string()))?;
        let bottom: u8 = bottom
            .trim()
            .parse()
            .map_err(|_| ParseTimeSignatureError(s.to_string()))?;
        Ok(TimeSignature::from_parts(top, bottom).unwrap_or_default())
    }
}
