// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! The seven natural note letters.
//!
//! Letters form a cycle (C D E F G A B, then back to C) and each carries
//! the pitch class of its unaltered form.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Note letters (natural pitch names)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    /// All letters in cyclic order starting from C
    pub const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    /// Get the pitch class (0-11) of the unaltered letter
    pub fn natural_pitch_class(self) -> u8 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    fn index(self) -> usize {
        match self {
            Letter::C => 0,
            Letter::D => 1,
            Letter::E => 2,
            Letter::F => 3,
            Letter::G => 4,
            Letter::A => 5,
            Letter::B => 6,
        }
    }

    /// Get the next letter in the cycle (B wraps to C)
    pub fn next(self) -> Letter {
        Letter::ALL[(self.index() + 1) % 7]
    }

    /// Get the previous letter in the cycle (C wraps to B)
    pub fn previous(self) -> Letter {
        Letter::ALL[(self.index() + 6) % 7]
    }

    /// Advance by a number of letter steps, wrapping past B
    pub fn advance(self, steps: u8) -> Letter {
        Letter::ALL[(self.index() + steps as usize) % 7]
    }

    /// Semitone gap up to the next letter (1 for E-F and B-C, 2 otherwise)
    pub fn gap_to_next(self) -> u8 {
        (self.next().natural_pitch_class() + 12 - self.natural_pitch_class()) % 12
    }

    /// Parse a letter from a character (case-insensitive)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        };
        write!(f, "{}", c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_pitch_classes() {
        assert_eq!(Letter::C.natural_pitch_class(), 0);
        assert_eq!(Letter::D.natural_pitch_class(), 2);
        assert_eq!(Letter::E.natural_pitch_class(), 4);
        assert_eq!(Letter::F.natural_pitch_class(), 5);
        assert_eq!(Letter::G.natural_pitch_class(), 7);
        assert_eq!(Letter::A.natural_pitch_class(), 9);
        assert_eq!(Letter::B.natural_pitch_class(), 11);
    }

    #[test]
    fn test_cycle() {
        assert_eq!(Letter::B.next(), Letter::C);
        assert_eq!(Letter::C.previous(), Letter::B);
        assert_eq!(Letter::E.next(), Letter::F);

        // A full walk returns to the start
        let mut letter = Letter::C;
        for _ in 0..7 {
            letter = letter.next();
        }
        assert_eq!(letter, Letter::C);
    }

    #[test]
    fn test_advance() {
        assert_eq!(Letter::C.advance(0), Letter::C);
        assert_eq!(Letter::C.advance(2), Letter::E);
        assert_eq!(Letter::C.advance(7), Letter::C);
        // Ninth degree lands one letter up
        assert_eq!(Letter::A.advance(8 % 7), Letter::B);
    }

    #[test]
    fn test_gap_to_next() {
        assert_eq!(Letter::C.gap_to_next(), 2);
        assert_eq!(Letter::E.gap_to_next(), 1);
        assert_eq!(Letter::B.gap_to_next(), 1);
        assert_eq!(Letter::G.gap_to_next(), 2);
    }

    #[test]
    fn test_from_char() {
        assert_eq!(Letter::from_char('c'), Some(Letter::C));
        assert_eq!(Letter::from_char('B'), Some(Letter::B));
        assert_eq!(Letter::from_char('H'), None);
    }
}
