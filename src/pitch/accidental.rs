// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Accidentals and their pitch offsets.
//!
//! The explicit natural (♮) and the unmarked plain spelling both carry
//! offset 0 but are distinct spellings: the engine produces naturals when a
//! correction cancels a root accidental, and set construction collapses a
//! natural root to its plain form.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Accidental applied to a note letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accidental {
    DoubleFlat,
    Flat,
    /// Unmarked letter, no accidental symbol
    Plain,
    /// Explicit natural sign
    Natural,
    Sharp,
    DoubleSharp,
}

impl Accidental {
    /// All accidentals in ascending offset order
    pub const ALL: [Accidental; 6] = [
        Accidental::DoubleFlat,
        Accidental::Flat,
        Accidental::Plain,
        Accidental::Natural,
        Accidental::Sharp,
        Accidental::DoubleSharp,
    ];

    /// The five spellings counted by the note catalogue (naturals excluded)
    pub const SPELLED: [Accidental; 5] = [
        Accidental::DoubleFlat,
        Accidental::Flat,
        Accidental::Plain,
        Accidental::Sharp,
        Accidental::DoubleSharp,
    ];

    /// Get the semitone offset (-2 to +2)
    pub fn offset(self) -> i8 {
        match self {
            Accidental::DoubleFlat => -2,
            Accidental::Flat => -1,
            Accidental::Plain => 0,
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::DoubleSharp => 2,
        }
    }

    /// Get the display indicator
    pub fn indicator(self) -> &'static str {
        match self {
            Accidental::DoubleFlat => "\u{1d12b}",
            Accidental::Flat => "\u{266d}",
            Accidental::Plain => "",
            Accidental::Natural => "\u{266e}",
            Accidental::Sharp => "\u{266f}",
            Accidental::DoubleSharp => "\u{1d12a}",
        }
    }

    /// Map a semitone offset back to an accidental.
    ///
    /// Offset 0 maps to the explicit natural; values beyond the
    /// double-accidental range clamp to the nearest double accidental.
    pub fn from_offset(offset: i8) -> Accidental {
        match offset {
            i8::MIN..=-2 => Accidental::DoubleFlat,
            -1 => Accidental::Flat,
            0 => Accidental::Natural,
            1 => Accidental::Sharp,
            _ => Accidental::DoubleSharp,
        }
    }

    /// Parse an accidental from its indicator or an ASCII form
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "\u{1d12b}" | "bb" => Some(Accidental::DoubleFlat),
            "\u{266d}" | "b" => Some(Accidental::Flat),
            "" => Some(Accidental::Plain),
            "\u{266e}" | "n" => Some(Accidental::Natural),
            "\u{266f}" | "#" => Some(Accidental::Sharp),
            "\u{1d12a}" | "##" | "x" => Some(Accidental::DoubleSharp),
            _ => None,
        }
    }
}

impl fmt::Display for Accidental {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.indicator())
    }
}
