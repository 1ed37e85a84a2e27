// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Spelled note identities.
//!
//! A `NoteType` is a letter plus an accidental. Its pitch class is derived,
//! not stored, so two enharmonic spellings (C♯ and D♭) are distinct values
//! that happen to share a pitch class.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Accidental, Letter, Octave, MIDI_MAX};

/// A spelled pitch identity (letter + accidental), distinct from pitch class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteType {
    letter: Letter,
    accidental: Accidental,
}

impl NoteType {
    /// Create a note type from a letter and accidental
    pub const fn new(letter: Letter, accidental: Accidental) -> Self {
        Self { letter, accidental }
    }

    /// Get the letter
    pub fn letter(self) -> Letter {
        self.letter
    }

    /// Get the accidental
    pub fn accidental(self) -> Accidental {
        self.accidental
    }

    /// Get the pitch class (0-11)
    pub fn pitch_class(self) -> u8 {
        (self.letter.natural_pitch_class() as i8 + self.accidental.offset()).rem_euclid(12) as u8
    }

    /// Check whether this spelling carries an explicit natural sign
    pub fn is_natural(self) -> bool {
        self.accidental == Accidental::Natural
    }

    /// Collapse an explicit natural to the plain-letter spelling
    pub fn normalized(self) -> Self {
        if self.is_natural() {
            NoteType::new(self.letter, Accidental::Plain)
        } else {
            self
        }
    }

    /// Highest octave at which this spelling stays below the MIDI ceiling
    pub fn max_octave(self) -> Octave {
        (MIDI_MAX - self.pitch_class()) / 12
    }

    /// Parse a spelled note name (e.g., "C", "F#", "B♭", "Gbb", "Dx", "E♮")
    pub fn from_str(s: &str) -> Option<Self> {
        let mut chars = s.trim().chars();
        let letter = Letter::from_char(chars.next()?)?;
        let accidental = Accidental::from_str(chars.as_str())?;
        Some(NoteType::new(letter, accidental))
    }

    /// All 35 spellings in the catalogue (naturals excluded), letter-major order
    pub fn all_spelled() -> impl Iterator<Item = NoteType> {
        Letter::ALL.iter().flat_map(|&letter| {
            Accidental::SPELLED
                .iter()
                .map(move |&accidental| NoteType::new(letter, accidental))
        })
    }

    /// Other catalogue spellings sharing this pitch class
    pub fn enharmonics(self) -> Vec<NoteType> {
        let pc = self.pitch_class();
        NoteType::all_spelled()
            .filter(|nt| nt.pitch_class() == pc && *nt != self)
            .collect()
    }
}

impl fmt::Display for NoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter, self.accidental.indicator())
    }
}
