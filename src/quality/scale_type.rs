// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! The scale quality catalogue.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::nashville::NashvilleNumber as N;

/// Whether a scale behaves as a major or minor key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tonality {
    Major,
    Minor,
}

/// Semitone step between consecutive scale degrees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Half,
    Whole,
    WholeHalf,
    WholeWhole,
}

impl Step {
    /// Map a semitone count to a step (1-4 semitones)
    pub fn from_semitones(semitones: u8) -> Option<Step> {
        match semitones {
            1 => Some(Step::Half),
            2 => Some(Step::Whole),
            3 => Some(Step::WholeHalf),
            4 => Some(Step::WholeWhole),
            _ => None,
        }
    }

    /// Get the semitone count
    pub fn semitones(self) -> u8 {
        match self {
            Step::Half => 1,
            Step::Whole => 2,
            Step::WholeHalf => 3,
            Step::WholeWhole => 4,
        }
    }
}

/// Scale qualities with their Nashville-number spellings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleType {
    Major,
    NaturalMinor,
    HarmonicMinor,
    MelodicMinor,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Locrian,
    MajorPentatonic,
    MinorPentatonic,
    Blues,
    WholeTone,
}

impl ScaleType {
    /// All scale types in the catalogue
    pub const ALL: [ScaleType; 13] = [
        ScaleType::Major,
        ScaleType::NaturalMinor,
        ScaleType::HarmonicMinor,
        ScaleType::MelodicMinor,
        ScaleType::Dorian,
        ScaleType::Phrygian,
        ScaleType::Lydian,
        ScaleType::Mixolydian,
        ScaleType::Locrian,
        ScaleType::MajorPentatonic,
        ScaleType::MinorPentatonic,
        ScaleType::Blues,
        ScaleType::WholeTone,
    ];

    /// Get the display name
    pub fn name(self) -> &'static str {
        match self {
            ScaleType::Major => "Major",
            ScaleType::NaturalMinor => "Natural Minor",
            ScaleType::HarmonicMinor => "Harmonic Minor",
            ScaleType::MelodicMinor => "Melodic Minor",
            ScaleType::Dorian => "Dorian",
            ScaleType::Phrygian => "Phrygian",
            ScaleType::Lydian => "Lydian",
            ScaleType::Mixolydian => "Mixolydian",
            ScaleType::Locrian => "Locrian",
            ScaleType::MajorPentatonic => "Major Pentatonic",
            ScaleType::MinorPentatonic => "Minor Pentatonic",
            ScaleType::Blues => "Blues",
            ScaleType::WholeTone => "Whole Tone",
        }
    }

    /// Get the Nashville numbers for the ascending scale
    pub fn numbers(self) -> &'static [N] {
        match self {
            ScaleType::Major => &[
                N::ONE,
                N::TWO,
                N::THREE,
                N::FOUR,
                N::FIVE,
                N::SIX,
                N::SEVEN,
            ],
            ScaleType::NaturalMinor => &[
                N::ONE,
                N::TWO,
                N::FLAT_THREE,
                N::FOUR,
                N::FIVE,
                N::FLAT_SIX,
                N::FLAT_SEVEN,
            ],
            ScaleType::HarmonicMinor => &[
                N::ONE,
                N::TWO,
                N::FLAT_THREE,
                N::FOUR,
                N::FIVE,
                N::FLAT_SIX,
                N::SEVEN,
            ],
            ScaleType::MelodicMinor => &[
                N::ONE,
                N::TWO,
                N::FLAT_THREE,
                N::FOUR,
                N::FIVE,
                N::SIX,
                N::SEVEN,
            ],
            ScaleType::Dorian => &[
                N::ONE,
                N::TWO,
                N::FLAT_THREE,
                N::FOUR,
                N::FIVE,
                N::SIX,
                N::FLAT_SEVEN,
            ],
            ScaleType::Phrygian => &[
                N::ONE,
                N::FLAT_TWO,
                N::FLAT_THREE,
                N::FOUR,
                N::FIVE,
                N::FLAT_SIX,
                N::FLAT_SEVEN,
            ],
            ScaleType::Lydian => &[
                N::ONE,
                N::TWO,
                N::THREE,
                N::SHARP_FOUR,
                N::FIVE,
                N::SIX,
                N::SEVEN,
            ],
            ScaleType::Mixolydian => &[
                N::ONE,
                N::TWO,
                N::THREE,
                N::FOUR,
                N::FIVE,
                N::SIX,
                N::FLAT_SEVEN,
            ],
            ScaleType::Locrian => &[
                N::ONE,
                N::FLAT_TWO,
                N::FLAT_THREE,
                N::FOUR,
                N::FLAT_FIVE,
                N::FLAT_SIX,
                N::FLAT_SEVEN,
            ],
            ScaleType::MajorPentatonic => &[N::ONE, N::TWO, N::THREE, N::FIVE, N::SIX],
            ScaleType::MinorPentatonic => {
                &[N::ONE, N::FLAT_THREE, N::FOUR, N::FIVE, N::FLAT_SEVEN]
            }
            ScaleType::Blues => &[
                N::ONE,
                N::FLAT_THREE,
                N::FOUR,
                N::FLAT_FIVE,
                N::FIVE,
                N::FLAT_SEVEN,
            ],
            ScaleType::WholeTone => &[
                N::ONE,
                N::TWO,
                N::THREE,
                N::SHARP_FOUR,
                N::SHARP_FIVE,
                N::SHARP_SIX,
            ],
        }
    }

    /// Tonality of the scale, where it behaves as a key
    pub fn tonality(self) -> Option<Tonality> {
        match self {
            ScaleType::Major => Some(Tonality::Major),
            ScaleType::NaturalMinor | ScaleType::HarmonicMinor | ScaleType::MelodicMinor => {
                Some(Tonality::Minor)
            }
            _ => None,
        }
    }
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
