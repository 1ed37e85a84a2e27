// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! The chord quality catalogue.
//!
//! Fifty chord types, each a display symbol plus the Nashville numbers it
//! stacks above the root. The half-diminished quality shares the m7♭5
//! degree list but keeps its own symbol.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::nashville::NashvilleNumber as N;

/// Chord qualities with their Nashville-number spellings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChordType {
    Major,
    MajorSeven,
    Seven,
    AddNine,
    Minor,
    MinorSeven,
    Diminished,
    DiminishedSeven,
    Augmented,
    SuspendedFour,
    SuspendedTwo,
    MajorNine,
    MajorThirteen,
    MajorNineSharpEleven,
    MajorThirteenSharpEleven,
    Six,
    SixAddNine,
    MajorSevenSharpFive,
    MajorSevenFlatFive,
    MinorNine,
    MinorEleven,
    MinorThirteen,
    MinorSix,
    MinorAddNine,
    MinorSixAddNine,
    MinorMajorSeven,
    MinorMajorNine,
    MinorSevenFlatFive,
    HalfDiminished,
    MinorSevenSharpFive,
    Nine,
    Eleven,
    Thirteen,
    SevenSuspendedFour,
    SevenFlatFive,
    SevenSharpFive,
    SevenFlatNine,
    SevenSharpNine,
    SevenFlatFiveFlatNine,
    SevenFlatFiveSharpNine,
    SevenSharpFiveFlatNine,
    SevenSharpFiveSharpNine,
    NineFlatFive,
    NineSharpFive,
    ThirteenSharpEleven,
    ThirteenFlatNine,
    ElevenFlatNine,
    PowerChord,
    SuspendedTwoSuspendedFour,
    FlatFive,
}

impl ChordType {
    /// All chord types in the catalogue
    pub const ALL: [ChordType; 50] = [
        ChordType::Major,
        ChordType::MajorSeven,
        ChordType::Seven,
        ChordType::AddNine,
        ChordType::Minor,
        ChordType::MinorSeven,
        ChordType::Diminished,
        ChordType::DiminishedSeven,
        ChordType::Augmented,
        ChordType::SuspendedFour,
        ChordType::SuspendedTwo,
        ChordType::MajorNine,
        ChordType::MajorThirteen,
        ChordType::MajorNineSharpEleven,
        ChordType::MajorThirteenSharpEleven,
        ChordType::Six,
        ChordType::SixAddNine,
        ChordType::MajorSevenSharpFive,
        ChordType::MajorSevenFlatFive,
        ChordType::MinorNine,
        ChordType::MinorEleven,
        ChordType::MinorThirteen,
        ChordType::MinorSix,
        ChordType::MinorAddNine,
        ChordType::MinorSixAddNine,
        ChordType::MinorMajorSeven,
        ChordType::MinorMajorNine,
        ChordType::MinorSevenFlatFive,
        ChordType::HalfDiminished,
        ChordType::MinorSevenSharpFive,
        ChordType::Nine,
        ChordType::Eleven,
        ChordType::Thirteen,
        ChordType::SevenSuspendedFour,
        ChordType::SevenFlatFive,
        ChordType::SevenSharpFive,
        ChordType::SevenFlatNine,
        ChordType::SevenSharpNine,
        ChordType::SevenFlatFiveFlatNine,
        ChordType::SevenFlatFiveSharpNine,
        ChordType::SevenSharpFiveFlatNine,
        ChordType::SevenSharpFiveSharpNine,
        ChordType::NineFlatFive,
        ChordType::NineSharpFive,
        ChordType::ThirteenSharpEleven,
        ChordType::ThirteenFlatNine,
        ChordType::ElevenFlatNine,
        ChordType::PowerChord,
        ChordType::SuspendedTwoSuspendedFour,
        ChordType::FlatFive,
    ];

    /// Get the display symbol
    pub fn symbol(self) -> &'static str {
        match self {
            ChordType::Major => "maj",
            ChordType::MajorSeven => "maj7",
            ChordType::Seven => "7",
            ChordType::AddNine => "add9",
            ChordType::Minor => "m",
            ChordType::MinorSeven => "m7",
            ChordType::Diminished => "dim",
            ChordType::DiminishedSeven => "dim7",
            ChordType::Augmented => "aug",
            ChordType::SuspendedFour => "sus4",
            ChordType::SuspendedTwo => "sus2",
            ChordType::MajorNine => "maj9",
            ChordType::MajorThirteen => "maj13",
            ChordType::MajorNineSharpEleven => "maj9\u{266f}11",
            ChordType::MajorThirteenSharpEleven => "maj13\u{266f}11",
            ChordType::Six => "6",
            ChordType::SixAddNine => "6add9",
            ChordType::MajorSevenSharpFive => "maj7\u{266f}5",
            ChordType::MajorSevenFlatFive => "maj7\u{266d}5",
            ChordType::MinorNine => "m9",
            ChordType::MinorEleven => "m11",
            ChordType::MinorThirteen => "m13",
            ChordType::MinorSix => "m6",
            ChordType::MinorAddNine => "madd9",
            ChordType::MinorSixAddNine => "m6add9",
            ChordType::MinorMajorSeven => "mM7",
            ChordType::MinorMajorNine => "mM9",
            ChordType::MinorSevenFlatFive => "m7\u{266d}5",
            ChordType::HalfDiminished => "\u{f8}",
            ChordType::MinorSevenSharpFive => "m7\u{266f}5",
            ChordType::Nine => "9",
            ChordType::Eleven => "11",
            ChordType::Thirteen => "13",
            ChordType::SevenSuspendedFour => "7sus4",
            ChordType::SevenFlatFive => "7\u{266d}5",
            ChordType::SevenSharpFive => "7\u{266f}5",
            ChordType::SevenFlatNine => "7\u{266d}9",
            ChordType::SevenSharpNine => "7\u{266f}9",
            ChordType::SevenFlatFiveFlatNine => "7\u{266d}5\u{266d}9",
            ChordType::SevenFlatFiveSharpNine => "7\u{266d}5\u{266f}9",
            ChordType::SevenSharpFiveFlatNine => "7\u{266f}5\u{266d}9",
            ChordType::SevenSharpFiveSharpNine => "7\u{266f}5\u{266f}9",
            ChordType::NineFlatFive => "9\u{266d}5",
            ChordType::NineSharpFive => "9\u{266f}5",
            ChordType::ThirteenSharpEleven => "13\u{266f}11",
            ChordType::ThirteenFlatNine => "13\u{266d}9",
            ChordType::ElevenFlatNine => "11\u{266d}9",
            ChordType::PowerChord => "5",
            ChordType::SuspendedTwoSuspendedFour => "sus2sus4",
            ChordType::FlatFive => "-5",
        }
    }

    /// Get the Nashville numbers stacked above the root
    pub fn numbers(self) -> &'static [N] {
        match self {
            ChordType::Major => &[N::ONE, N::THREE, N::FIVE],
            ChordType::MajorSeven => &[N::ONE, N::THREE, N::FIVE, N::SEVEN],
            ChordType::Seven => &[N::ONE, N::THREE, N::FIVE, N::FLAT_SEVEN],
            ChordType::AddNine => &[N::ONE, N::THREE, N::FIVE, N::NINE],
            ChordType::Minor => &[N::ONE, N::FLAT_THREE, N::FIVE],
            ChordType::MinorSeven => &[N::ONE, N::FLAT_THREE, N::FIVE, N::FLAT_SEVEN],
            ChordType::Diminished => &[N::ONE, N::FLAT_THREE, N::FLAT_FIVE],
            ChordType::DiminishedSeven => &[N::ONE, N::FLAT_THREE, N::FLAT_FIVE, N::SIX],
            ChordType::Augmented => &[N::ONE, N::THREE, N::SHARP_FIVE],
            ChordType::SuspendedFour => &[N::ONE, N::FOUR, N::FIVE],
            ChordType::SuspendedTwo => &[N::ONE, N::TWO, N::FIVE],
            ChordType::MajorNine => &[N::ONE, N::THREE, N::FIVE, N::SEVEN, N::NINE],
            ChordType::MajorThirteen => &[
                N::ONE,
                N::THREE,
                N::FIVE,
                N::SEVEN,
                N::NINE,
                N::ELEVEN,
                N::THIRTEEN,
            ],
            ChordType::MajorNineSharpEleven => {
                &[N::ONE, N::THREE, N::FIVE, N::SEVEN, N::NINE, N::SHARP_ELEVEN]
            }
            ChordType::MajorThirteenSharpEleven => &[
                N::ONE,
                N::THREE,
                N::FIVE,
                N::SEVEN,
                N::NINE,
                N::SHARP_ELEVEN,
                N::THIRTEEN,
            ],
            ChordType::Six => &[N::ONE, N::THREE, N::FIVE, N::SIX],
            ChordType::SixAddNine => &[N::ONE, N::THREE, N::FIVE, N::SIX, N::NINE],
            ChordType::MajorSevenSharpFive => &[N::ONE, N::THREE, N::SHARP_FIVE, N::SEVEN],
            ChordType::MajorSevenFlatFive => &[N::ONE, N::THREE, N::FLAT_FIVE, N::SEVEN],
            ChordType::MinorNine => &[N::ONE, N::FLAT_THREE, N::FIVE, N::FLAT_SEVEN, N::NINE],
            ChordType::MinorEleven => &[
                N::ONE,
                N::FLAT_THREE,
                N::FIVE,
                N::FLAT_SEVEN,
                N::NINE,
                N::ELEVEN,
            ],
            ChordType::MinorThirteen => &[
                N::ONE,
                N::FLAT_THREE,
                N::FIVE,
                N::FLAT_SEVEN,
                N::NINE,
                N::ELEVEN,
                N::THIRTEEN,
            ],
            ChordType::MinorSix => &[N::ONE, N::FLAT_THREE, N::FIVE, N::SIX],
            ChordType::MinorAddNine => &[N::ONE, N::FLAT_THREE, N::FIVE, N::NINE],
            ChordType::MinorSixAddNine => &[N::ONE, N::FLAT_THREE, N::FIVE, N::SIX, N::NINE],
            ChordType::MinorMajorSeven => &[N::ONE, N::FLAT_THREE, N::FIVE, N::SEVEN],
            ChordType::MinorMajorNine => &[N::ONE, N::FLAT_THREE, N::FIVE, N::SEVEN, N::NINE],
            ChordType::MinorSevenFlatFive => {
                &[N::ONE, N::FLAT_THREE, N::FLAT_FIVE, N::FLAT_SEVEN]
            }
            ChordType::HalfDiminished => &[N::ONE, N::FLAT_THREE, N::FLAT_FIVE, N::FLAT_SEVEN],
            ChordType::MinorSevenSharpFive => {
                &[N::ONE, N::FLAT_THREE, N::SHARP_FIVE, N::FLAT_SEVEN]
            }
            ChordType::Nine => &[N::ONE, N::THREE, N::FIVE, N::FLAT_SEVEN, N::NINE],
            ChordType::Eleven => &[
                N::ONE,
                N::THREE,
                N::FIVE,
                N::FLAT_SEVEN,
                N::NINE,
                N::ELEVEN,
            ],
            ChordType::Thirteen => &[
                N::ONE,
                N::THREE,
                N::FIVE,
                N::FLAT_SEVEN,
                N::NINE,
                N::ELEVEN,
                N::THIRTEEN,
            ],
            ChordType::SevenSuspendedFour => &[N::ONE, N::FOUR, N::FIVE, N::FLAT_SEVEN],
            ChordType::SevenFlatFive => &[N::ONE, N::THREE, N::FLAT_FIVE, N::FLAT_SEVEN],
            ChordType::SevenSharpFive => &[N::ONE, N::THREE, N::SHARP_FIVE, N::FLAT_SEVEN],
            ChordType::SevenFlatNine => {
                &[N::ONE, N::THREE, N::FIVE, N::FLAT_SEVEN, N::FLAT_NINE]
            }
            ChordType::SevenSharpNine => {
                &[N::ONE, N::THREE, N::FIVE, N::FLAT_SEVEN, N::SHARP_NINE]
            }
            ChordType::SevenFlatFiveFlatNine => {
                &[N::ONE, N::THREE, N::FLAT_FIVE, N::FLAT_SEVEN, N::FLAT_NINE]
            }
            ChordType::SevenFlatFiveSharpNine => {
                &[N::ONE, N::THREE, N::FLAT_FIVE, N::FLAT_SEVEN, N::SHARP_NINE]
            }
            ChordType::SevenSharpFiveFlatNine => {
                &[N::ONE, N::THREE, N::SHARP_FIVE, N::FLAT_SEVEN, N::FLAT_NINE]
            }
            ChordType::SevenSharpFiveSharpNine => {
                &[N::ONE, N::THREE, N::SHARP_FIVE, N::FLAT_SEVEN, N::SHARP_NINE]
            }
            ChordType::NineFlatFive => &[N::ONE, N::THREE, N::FLAT_FIVE, N::FLAT_SEVEN, N::NINE],
            ChordType::NineSharpFive => {
                &[N::ONE, N::THREE, N::SHARP_FIVE, N::FLAT_SEVEN, N::NINE]
            }
            ChordType::ThirteenSharpEleven => &[
                N::ONE,
                N::THREE,
                N::FIVE,
                N::FLAT_SEVEN,
                N::NINE,
                N::SHARP_ELEVEN,
                N::THIRTEEN,
            ],
            ChordType::ThirteenFlatNine => &[
                N::ONE,
                N::THREE,
                N::FIVE,
                N::FLAT_SEVEN,
                N::FLAT_NINE,
                N::THIRTEEN,
            ],
            ChordType::ElevenFlatNine => {
                &[N::ONE, N::FIVE, N::FLAT_SEVEN, N::FLAT_NINE, N::ELEVEN]
            }
            ChordType::PowerChord => &[N::ONE, N::FIVE],
            ChordType::SuspendedTwoSuspendedFour => &[N::ONE, N::TWO, N::FOUR, N::FIVE],
            ChordType::FlatFive => &[N::ONE, N::THREE, N::FLAT_FIVE],
        }
    }
}

impl fmt::Display for ChordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_size() {
        assert_eq!(ChordType::ALL.len(), 50);
    }

    #[test]
    fn test_every_type_starts_on_the_root() {
        for chord_type in ChordType::ALL {
            assert_eq!(
                chord_type.numbers()[0],
                N::ONE,
                "{} does not start on the root",
                chord_type
            );
        }
    }

    #[test]
    fn test_symbols() {
        assert_eq!(ChordType::Major.symbol(), "maj");
        assert_eq!(ChordType::HalfDiminished.symbol(), "\u{f8}");
        assert_eq!(ChordType::FlatFive.symbol(), "-5");
        assert_eq!(ChordType::MajorThirteenSharpEleven.symbol(), "maj13\u{266f}11");
    }

    #[test]
    fn test_half_diminished_matches_m7b5_degrees() {
        assert_eq!(
            ChordType::HalfDiminished.numbers(),
            ChordType::MinorSevenFlatFive.numbers()
        );
        assert_ne!(
            ChordType::HalfDiminished.symbol(),
            ChordType::MinorSevenFlatFive.symbol()
        );
    }

    #[test]
    fn test_diminished_seven_uses_natural_six() {
        // The dim7 seventh is spelled as a sixth in this catalogue
        assert_eq!(
            ChordType::DiminishedSeven.numbers(),
            &[N::ONE, N::FLAT_THREE, N::FLAT_FIVE, N::SIX]
        );
    }
}
