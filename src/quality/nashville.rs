// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Nashville numbers.
//!
//! A Nashville number names a scale degree relative to a major-scale root,
//! together with an accidental and the raw pitch-class distance from that
//! root. Distances for the upper extensions run past 12 and are reduced
//! mod 12 by the spelling engine. Note the wrapped distances on degree 1:
//! flattening the root wraps below it, so 𝄫1 sits at distance 10 and ♭1
//! at 11.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::pitch::Accidental;

/// A scale degree relative to a major-scale root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NashvilleNumber {
    degree: u8,
    accidental: Accidental,
    distance: u8,
}

impl NashvilleNumber {
    /// Create a Nashville number from a degree (1-13), accidental, and
    /// pitch-class distance from the root
    pub const fn new(degree: u8, accidental: Accidental, distance: u8) -> Self {
        Self {
            degree,
            accidental,
            distance,
        }
    }

    /// Get the degree (1-13)
    pub fn degree(self) -> u8 {
        self.degree
    }

    /// Get the accidental
    pub fn accidental(self) -> Accidental {
        self.accidental
    }

    /// Get the raw pitch-class distance from the root
    pub fn distance(self) -> u8 {
        self.distance
    }

    pub const DOUBLE_FLAT_ONE: NashvilleNumber =
        NashvilleNumber::new(1, Accidental::DoubleFlat, 10);
    pub const FLAT_ONE: NashvilleNumber = NashvilleNumber::new(1, Accidental::Flat, 11);
    pub const ONE: NashvilleNumber = NashvilleNumber::new(1, Accidental::Plain, 0);
    pub const SHARP_ONE: NashvilleNumber = NashvilleNumber::new(1, Accidental::Sharp, 1);
    pub const DOUBLE_SHARP_ONE: NashvilleNumber =
        NashvilleNumber::new(1, Accidental::DoubleSharp, 2);

    pub const DOUBLE_FLAT_TWO: NashvilleNumber = NashvilleNumber::new(2, Accidental::DoubleFlat, 0);
    pub const FLAT_TWO: NashvilleNumber = NashvilleNumber::new(2, Accidental::Flat, 1);
    pub const TWO: NashvilleNumber = NashvilleNumber::new(2, Accidental::Plain, 2);
    pub const SHARP_TWO: NashvilleNumber = NashvilleNumber::new(2, Accidental::Sharp, 3);
    pub const DOUBLE_SHARP_TWO: NashvilleNumber =
        NashvilleNumber::new(2, Accidental::DoubleSharp, 4);

    pub const DOUBLE_FLAT_THREE: NashvilleNumber =
        NashvilleNumber::new(3, Accidental::DoubleFlat, 2);
    pub const FLAT_THREE: NashvilleNumber = NashvilleNumber::new(3, Accidental::Flat, 3);
    pub const THREE: NashvilleNumber = NashvilleNumber::new(3, Accidental::Plain, 4);
    pub const SHARP_THREE: NashvilleNumber = NashvilleNumber::new(3, Accidental::Sharp, 5);
    pub const DOUBLE_SHARP_THREE: NashvilleNumber =
        NashvilleNumber::new(3, Accidental::DoubleSharp, 6);

    pub const DOUBLE_FLAT_FOUR: NashvilleNumber =
        NashvilleNumber::new(4, Accidental::DoubleFlat, 3);
    pub const FLAT_FOUR: NashvilleNumber = NashvilleNumber::new(4, Accidental::Flat, 4);
    pub const FOUR: NashvilleNumber = NashvilleNumber::new(4, Accidental::Plain, 5);
    pub const SHARP_FOUR: NashvilleNumber = NashvilleNumber::new(4, Accidental::Sharp, 6);
    pub const DOUBLE_SHARP_FOUR: NashvilleNumber =
        NashvilleNumber::new(4, Accidental::DoubleSharp, 7);

    pub const DOUBLE_FLAT_FIVE: NashvilleNumber =
        NashvilleNumber::new(5, Accidental::DoubleFlat, 5);
    pub const FLAT_FIVE: NashvilleNumber = NashvilleNumber::new(5, Accidental::Flat, 6);
    pub const FIVE: NashvilleNumber = NashvilleNumber::new(5, Accidental::Plain, 7);
    pub const SHARP_FIVE: NashvilleNumber = NashvilleNumber::new(5, Accidental::Sharp, 8);
    pub const DOUBLE_SHARP_FIVE: NashvilleNumber =
        NashvilleNumber::new(5, Accidental::DoubleSharp, 9);

    pub const DOUBLE_FLAT_SIX: NashvilleNumber = NashvilleNumber::new(6, Accidental::DoubleFlat, 7);
    pub const FLAT_SIX: NashvilleNumber = NashvilleNumber::new(6, Accidental::Flat, 8);
    pub const SIX: NashvilleNumber = NashvilleNumber::new(6, Accidental::Plain, 9);
    pub const SHARP_SIX: NashvilleNumber = NashvilleNumber::new(6, Accidental::Sharp, 10);
    pub const DOUBLE_SHARP_SIX: NashvilleNumber =
        NashvilleNumber::new(6, Accidental::DoubleSharp, 11);

    pub const DOUBLE_FLAT_SEVEN: NashvilleNumber =
        NashvilleNumber::new(7, Accidental::DoubleFlat, 9);
    pub const FLAT_SEVEN: NashvilleNumber = NashvilleNumber::new(7, Accidental::Flat, 10);
    pub const SEVEN: NashvilleNumber = NashvilleNumber::new(7, Accidental::Plain, 11);
    pub const SHARP_SEVEN: NashvilleNumber = NashvilleNumber::new(7, Accidental::Sharp, 12);
    pub const DOUBLE_SHARP_SEVEN: NashvilleNumber =
        NashvilleNumber::new(7, Accidental::DoubleSharp, 13);

    pub const DOUBLE_FLAT_OCTAVE: NashvilleNumber =
        NashvilleNumber::new(8, Accidental::DoubleFlat, 10);
    pub const FLAT_OCTAVE: NashvilleNumber = NashvilleNumber::new(8, Accidental::Flat, 11);
    pub const OCTAVE: NashvilleNumber = NashvilleNumber::new(8, Accidental::Plain, 12);
    pub const SHARP_OCTAVE: NashvilleNumber = NashvilleNumber::new(8, Accidental::Sharp, 13);
    pub const DOUBLE_SHARP_OCTAVE: NashvilleNumber =
        NashvilleNumber::new(8, Accidental::DoubleSharp, 14);

    pub const DOUBLE_FLAT_NINE: NashvilleNumber =
        NashvilleNumber::new(9, Accidental::DoubleFlat, 12);
    pub const FLAT_NINE: NashvilleNumber = NashvilleNumber::new(9, Accidental::Flat, 13);
    pub const NINE: NashvilleNumber = NashvilleNumber::new(9, Accidental::Plain, 14);
    pub const SHARP_NINE: NashvilleNumber = NashvilleNumber::new(9, Accidental::Sharp, 15);
    pub const DOUBLE_SHARP_NINE: NashvilleNumber =
        NashvilleNumber::new(9, Accidental::DoubleSharp, 16);

    pub const DOUBLE_FLAT_TEN: NashvilleNumber =
        NashvilleNumber::new(10, Accidental::DoubleFlat, 14);
    pub const FLAT_TEN: NashvilleNumber = NashvilleNumber::new(10, Accidental::Flat, 15);
    pub const TEN: NashvilleNumber = NashvilleNumber::new(10, Accidental::Plain, 16);
    pub const SHARP_TEN: NashvilleNumber = NashvilleNumber::new(10, Accidental::Sharp, 17);
    pub const DOUBLE_SHARP_TEN: NashvilleNumber =
        NashvilleNumber::new(10, Accidental::DoubleSharp, 18);

    pub const DOUBLE_FLAT_ELEVEN: NashvilleNumber =
        NashvilleNumber::new(11, Accidental::DoubleFlat, 15);
    pub const FLAT_ELEVEN: NashvilleNumber = NashvilleNumber::new(11, Accidental::Flat, 16);
    pub const ELEVEN: NashvilleNumber = NashvilleNumber::new(11, Accidental::Plain, 17);
    pub const SHARP_ELEVEN: NashvilleNumber = NashvilleNumber::new(11, Accidental::Sharp, 18);
    pub const DOUBLE_SHARP_ELEVEN: NashvilleNumber =
        NashvilleNumber::new(11, Accidental::DoubleSharp, 19);

    pub const DOUBLE_FLAT_TWELVE: NashvilleNumber =
        NashvilleNumber::new(12, Accidental::DoubleFlat, 17);
    pub const FLAT_TWELVE: NashvilleNumber = NashvilleNumber::new(12, Accidental::Flat, 18);
    pub const TWELVE: NashvilleNumber = NashvilleNumber::new(12, Accidental::Plain, 19);
    pub const SHARP_TWELVE: NashvilleNumber = NashvilleNumber::new(12, Accidental::Sharp, 20);
    pub const DOUBLE_SHARP_TWELVE: NashvilleNumber =
        NashvilleNumber::new(12, Accidental::DoubleSharp, 21);

    pub const DOUBLE_FLAT_THIRTEEN: NashvilleNumber =
        NashvilleNumber::new(13, Accidental::DoubleFlat, 19);
    pub const FLAT_THIRTEEN: NashvilleNumber = NashvilleNumber::new(13, Accidental::Flat, 20);
    pub const THIRTEEN: NashvilleNumber = NashvilleNumber::new(13, Accidental::Plain, 21);
    pub const SHARP_THIRTEEN: NashvilleNumber = NashvilleNumber::new(13, Accidental::Sharp, 22);
    pub const DOUBLE_SHARP_THIRTEEN: NashvilleNumber =
        NashvilleNumber::new(13, Accidental::DoubleSharp, 23);
}

impl fmt::Display for NashvilleNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.accidental.indicator(), self.degree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_one_wraps_downward() {
        assert_eq!(NashvilleNumber::DOUBLE_FLAT_ONE.distance(), 10);
        assert_eq!(NashvilleNumber::FLAT_ONE.distance(), 11);
        assert_eq!(NashvilleNumber::ONE.distance(), 0);
        assert_eq!(NashvilleNumber::SHARP_ONE.distance(), 1);
        assert_eq!(NashvilleNumber::DOUBLE_SHARP_ONE.distance(), 2);
    }

    #[test]
    fn test_grid_distances() {
        // Each degree above 1 fans out base-2 .. base+2
        let bases: [(NashvilleNumber, u8); 12] = [
            (NashvilleNumber::TWO, 2),
            (NashvilleNumber::THREE, 4),
            (NashvilleNumber::FOUR, 5),
            (NashvilleNumber::FIVE, 7),
            (NashvilleNumber::SIX, 9),
            (NashvilleNumber::SEVEN, 11),
            (NashvilleNumber::OCTAVE, 12),
            (NashvilleNumber::NINE, 14),
            (NashvilleNumber::TEN, 16),
            (NashvilleNumber::ELEVEN, 17),
            (NashvilleNumber::TWELVE, 19),
            (NashvilleNumber::THIRTEEN, 21),
        ];
        for (number, base) in bases {
            assert_eq!(number.distance(), base);
        }
        assert_eq!(NashvilleNumber::DOUBLE_FLAT_TWO.distance(), 0);
        assert_eq!(NashvilleNumber::SHARP_ELEVEN.distance(), 18);
        assert_eq!(NashvilleNumber::DOUBLE_SHARP_THIRTEEN.distance(), 23);
    }

    #[test]
    fn test_display() {
        assert_eq!(NashvilleNumber::FLAT_THREE.to_string(), "\u{266d}3");
        assert_eq!(NashvilleNumber::ONE.to_string(), "1");
        assert_eq!(NashvilleNumber::SHARP_ELEVEN.to_string(), "\u{266f}11");
    }
}
