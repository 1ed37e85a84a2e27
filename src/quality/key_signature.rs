// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Key signatures.
//!
//! The thirty signatures of the circle of fifths, fifteen per tonality.
//! Sharps and flats accumulate in fixed order, so each signature's
//! accidental list is a prefix of one of two static tables. Roots outside
//! the table (such as D♯ major) have no signature.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Tonality;
use crate::pitch::{Accidental, Letter, NoteType};

/// Ordered sharps: each signature takes a prefix
static SHARPS: [NoteType; 7] = [
    NoteType::new(Letter::F, Accidental::Sharp),
    NoteType::new(Letter::C, Accidental::Sharp),
    NoteType::new(Letter::G, Accidental::Sharp),
    NoteType::new(Letter::D, Accidental::Sharp),
    NoteType::new(Letter::A, Accidental::Sharp),
    NoteType::new(Letter::E, Accidental::Sharp),
    NoteType::new(Letter::B, Accidental::Sharp),
];

/// Ordered flats: each signature takes a prefix
static FLATS: [NoteType; 7] = [
    NoteType::new(Letter::B, Accidental::Flat),
    NoteType::new(Letter::E, Accidental::Flat),
    NoteType::new(Letter::A, Accidental::Flat),
    NoteType::new(Letter::D, Accidental::Flat),
    NoteType::new(Letter::G, Accidental::Flat),
    NoteType::new(Letter::C, Accidental::Flat),
    NoteType::new(Letter::F, Accidental::Flat),
];

/// The thirty key signatures of the circle of fifths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeySignature {
    CMajor,
    GMajor,
    DMajor,
    AMajor,
    EMajor,
    BMajor,
    FSharpMajor,
    CSharpMajor,
    FMajor,
    BFlatMajor,
    EFlatMajor,
    AFlatMajor,
    DFlatMajor,
    GFlatMajor,
    CFlatMajor,
    AMinor,
    EMinor,
    BMinor,
    FSharpMinor,
    CSharpMinor,
    GSharpMinor,
    DSharpMinor,
    ASharpMinor,
    DMinor,
    GMinor,
    CMinor,
    FMinor,
    BFlatMinor,
    EFlatMinor,
    AFlatMinor,
}

impl KeySignature {
    /// Signed count of accidentals: positive sharps, negative flats
    fn fifths(self) -> i8 {
        match self {
            KeySignature::CMajor | KeySignature::AMinor => 0,
            KeySignature::GMajor | KeySignature::EMinor => 1,
            KeySignature::DMajor | KeySignature::BMinor => 2,
            KeySignature::AMajor | KeySignature::FSharpMinor => 3,
            KeySignature::EMajor | KeySignature::CSharpMinor => 4,
            KeySignature::BMajor | KeySignature::GSharpMinor => 5,
            KeySignature::FSharpMajor | KeySignature::DSharpMinor => 6,
            KeySignature::CSharpMajor | KeySignature::ASharpMinor => 7,
            KeySignature::FMajor | KeySignature::DMinor => -1,
            KeySignature::BFlatMajor | KeySignature::GMinor => -2,
            KeySignature::EFlatMajor | KeySignature::CMinor => -3,
            KeySignature::AFlatMajor | KeySignature::FMinor => -4,
            KeySignature::DFlatMajor | KeySignature::BFlatMinor => -5,
            KeySignature::GFlatMajor | KeySignature::EFlatMinor => -6,
            KeySignature::CFlatMajor | KeySignature::AFlatMinor => -7,
        }
    }

    /// The signature's accidentals in staff order
    pub fn accidentals(self) -> &'static [NoteType] {
        let fifths = self.fifths();
        if fifths >= 0 {
            &SHARPS[..fifths as usize]
        } else {
            &FLATS[..(-fifths) as usize]
        }
    }

    /// Tonality of the key
    pub fn tonality(self) -> Tonality {
        match self {
            KeySignature::CMajor
            | KeySignature::GMajor
            | KeySignature::DMajor
            | KeySignature::AMajor
            | KeySignature::EMajor
            | KeySignature::BMajor
            | KeySignature::FSharpMajor
            | KeySignature::CSharpMajor
            | KeySignature::FMajor
            | KeySignature::BFlatMajor
            | KeySignature::EFlatMajor
            | KeySignature::AFlatMajor
            | KeySignature::DFlatMajor
            | KeySignature::GFlatMajor
            | KeySignature::CFlatMajor => Tonality::Major,
            _ => Tonality::Minor,
        }
    }

    /// The key's root spelling
    pub fn root(self) -> NoteType {
        let (letter, accidental) = match self {
            KeySignature::CMajor | KeySignature::CMinor => (Letter::C, Accidental::Plain),
            KeySignature::GMajor | KeySignature::GMinor => (Letter::G, Accidental::Plain),
            KeySignature::DMajor | KeySignature::DMinor => (Letter::D, Accidental::Plain),
            KeySignature::AMajor | KeySignature::AMinor => (Letter::A, Accidental::Plain),
            KeySignature::EMajor | KeySignature::EMinor => (Letter::E, Accidental::Plain),
            KeySignature::BMajor | KeySignature::BMinor => (Letter::B, Accidental::Plain),
            KeySignature::FMajor | KeySignature::FMinor => (Letter::F, Accidental::Plain),
            KeySignature::FSharpMajor | KeySignature::FSharpMinor => {
                (Letter::F, Accidental::Sharp)
            }
            KeySignature::CSharpMajor | KeySignature::CSharpMinor => {
                (Letter::C, Accidental::Sharp)
            }
            KeySignature::GSharpMinor => (Letter::G, Accidental::Sharp),
            KeySignature::DSharpMinor => (Letter::D, Accidental::Sharp),
            KeySignature::ASharpMinor => (Letter::A, Accidental::Sharp),
            KeySignature::BFlatMajor | KeySignature::BFlatMinor => (Letter::B, Accidental::Flat),
            KeySignature::EFlatMajor | KeySignature::EFlatMinor => (Letter::E, Accidental::Flat),
            KeySignature::AFlatMajor | KeySignature::AFlatMinor => (Letter::A, Accidental::Flat),
            KeySignature::DFlatMajor => (Letter::D, Accidental::Flat),
            KeySignature::GFlatMajor => (Letter::G, Accidental::Flat),
            KeySignature::CFlatMajor => (Letter::C, Accidental::Flat),
        };
        NoteType::new(letter, accidental)
    }

    /// Look up the signature for a root spelling and tonality.
    ///
    /// Natural roots are treated as their plain spelling. Roots outside
    /// the thirty-signature table return None.
    pub fn for_key(root: NoteType, tonality: Tonality) -> Option<KeySignature> {
        let root = root.normalized();
        let key = (root.letter(), root.accidental());
        match tonality {
            Tonality::Major => match key {
                (Letter::C, Accidental::Plain) => Some(KeySignature::CMajor),
                (Letter::G, Accidental::Plain) => Some(KeySignature::GMajor),
                (Letter::D, Accidental::Plain) => Some(KeySignature::DMajor),
                (Letter::A, Accidental::Plain) => Some(KeySignature::AMajor),
                (Letter::E, Accidental::Plain) => Some(KeySignature::EMajor),
                (Letter::B, Accidental::Plain) => Some(KeySignature::BMajor),
                (Letter::F, Accidental::Sharp) => Some(KeySignature::FSharpMajor),
                (Letter::C, Accidental::Sharp) => Some(KeySignature::CSharpMajor),
                (Letter::F, Accidental::Plain) => Some(KeySignature::FMajor),
                (Letter::B, Accidental::Flat) => Some(KeySignature::BFlatMajor),
                (Letter::E, Accidental::Flat) => Some(KeySignature::EFlatMajor),
                (Letter::A, Accidental::Flat) => Some(KeySignature::AFlatMajor),
                (Letter::D, Accidental::Flat) => Some(KeySignature::DFlatMajor),
                (Letter::G, Accidental::Flat) => Some(KeySignature::GFlatMajor),
                (Letter::C, Accidental::Flat) => Some(KeySignature::CFlatMajor),
                _ => None,
            },
            Tonality::Minor => match key {
                (Letter::A, Accidental::Plain) => Some(KeySignature::AMinor),
                (Letter::E, Accidental::Plain) => Some(KeySignature::EMinor),
                (Letter::B, Accidental::Plain) => Some(KeySignature::BMinor),
                (Letter::F, Accidental::Sharp) => Some(KeySignature::FSharpMinor),
                (Letter::C, Accidental::Sharp) => Some(KeySignature::CSharpMinor),
                (Letter::G, Accidental::Sharp) => Some(KeySignature::GSharpMinor),
                (Letter::D, Accidental::Sharp) => Some(KeySignature::DSharpMinor),
                (Letter::A, Accidental::Sharp) => Some(KeySignature::ASharpMinor),
                (Letter::D, Accidental::Plain) => Some(KeySignature::DMinor),
                (Letter::G, Accidental::Plain) => Some(KeySignature::GMinor),
                (Letter::C, Accidental::Plain) => Some(KeySignature::CMinor),
                (Letter::F, Accidental::Plain) => Some(KeySignature::FMinor),
                (Letter::B, Accidental::Flat) => Some(KeySignature::BFlatMinor),
                (Letter::E, Accidental::Flat) => Some(KeySignature::EFlatMinor),
                (Letter::A, Accidental::Flat) => Some(KeySignature::AFlatMinor),
                _ => None,
            },
        }
    }
}

impl fmt::Display for KeySignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tonality = match self.tonality() {
            Tonality::Major => "Major",
            Tonality::Minor => "Minor",
        };
        write!(f, "{} {}", self.root(), tonality)
    }
}
