// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scales.
//!
//! A scale is an interval set tagged with its quality, the key signature
//! of the key it spells (when its tonality has one), and a derived step
//! pattern.

use std::fmt;

use crate::pitch::{Note, NoteType, Octave};
use crate::quality::{KeySignature, ScaleType, Step};
use crate::spelling::SpellingError;

use super::IntervalSet;

/// A spelled scale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scale {
    set: IntervalSet,
    scale_type: ScaleType,
    key_signature: Option<KeySignature>,
    name: String,
}

impl Scale {
    /// Build a scale at the lowest octave
    pub fn new(root: NoteType, scale_type: ScaleType) -> Result<Self, SpellingError> {
        Scale::with_octave(root, scale_type, 0)
    }

    /// Build a scale at a base octave (clamped to the scale's ceiling)
    pub fn with_octave(
        root: NoteType,
        scale_type: ScaleType,
        octave: Octave,
    ) -> Result<Self, SpellingError> {
        let set = IntervalSet::new(root, scale_type.numbers(), octave)?;
        let key_signature = scale_type
            .tonality()
            .and_then(|tonality| KeySignature::for_key(set.root_note_type(), tonality));
        let name = format!("{} {}", set.root_note_type(), scale_type.name());
        Ok(Self {
            set,
            scale_type,
            key_signature,
            name,
        })
    }

    /// Get the scale's display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the scale type
    pub fn scale_type(&self) -> ScaleType {
        self.scale_type
    }

    /// Key signature of the key this scale spells, if it has one
    pub fn key_signature(&self) -> Option<KeySignature> {
        self.key_signature
    }

    /// Get the root note type
    pub fn root_note_type(&self) -> NoteType {
        self.set.root_note_type()
    }

    /// Get the spelled note types in degree order
    pub fn note_types(&self) -> &[NoteType] {
        self.set.note_types()
    }

    /// Get the ascending notes
    pub fn notes(&self) -> &[Note] {
        self.set.notes()
    }

    /// Get the root note with its octave placement
    pub fn root_note(&self) -> Note {
        self.set.root_note()
    }

    /// Get the current base octave
    pub fn octave(&self) -> Octave {
        self.set.octave()
    }

    /// Get the highest base octave this scale can be placed at
    pub fn max_octave(&self) -> Octave {
        self.set.max_octave()
    }

    /// Move the scale to a new base octave, clamping to the ceiling
    pub fn set_octave(&mut self, octave: Octave) {
        self.set.set_octave(octave);
    }

    /// Semitone steps between consecutive notes. Steps wider than four
    /// semitones are not representable and are omitted.
    pub fn steps(&self) -> Vec<Step> {
        self.set
            .notes()
            .windows(2)
            .filter_map(|pair| Step::from_semitones((pair[1].pitch() - pair[0].pitch()) as u8))
            .collect()
    }

    /// Rebuild this scale on a new root, keeping quality and base octave
    pub fn transposed(&self, new_root: NoteType) -> Result<Scale, SpellingError> {
        Scale::with_octave(new_root, self.scale_type, self.set.octave())
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quality::Tonality;

    fn nt(s: &str) -> NoteType {
        NoteType::from_str(s).unwrap()
    }

    #[test]
    fn test_name() {
        let scale = Scale::new(nt("Bb"), ScaleType::HarmonicMinor).unwrap();
        assert_eq!(scale.name(), "B\u{266d} Harmonic Minor");
    }

    #[test]
    fn test_major_scale_steps() {
        let scale = Scale::with_octave(nt("D"), ScaleType::Major, 3).unwrap();
        assert_eq!(
            scale.steps(),
            [
                Step::Whole,
                Step::Whole,
                Step::Half,
                Step::Whole,
                Step::Whole,
                Step::Whole
            ]
        );
    }

    #[test]
    fn test_harmonic_minor_augmented_second() {
        let scale = Scale::new(nt("A"), ScaleType::HarmonicMinor).unwrap();
        assert_eq!(scale.steps()[5], Step::WholeHalf);
    }

    #[test]
    fn test_key_signatures() {
        let scale = Scale::new(nt("Eb"), ScaleType::Major).unwrap();
        assert_eq!(scale.key_signature(), Some(KeySignature::EFlatMajor));

        let scale = Scale::new(nt("D#"), ScaleType::NaturalMinor).unwrap();
        assert_eq!(scale.key_signature(), Some(KeySignature::DSharpMinor));

        // D# major is outside the thirty-signature table
        let scale = Scale::new(nt("D#"), ScaleType::Major).unwrap();
        assert_eq!(scale.key_signature(), None);

        // Modes have no tonality, so no signature either
        let scale = Scale::new(nt("D"), ScaleType::Dorian).unwrap();
        assert_eq!(scale.key_signature(), None);
    }

    #[test]
    fn test_signature_tonality_matches() {
        for root in NoteType::all_spelled() {
            let scale = Scale::new(root, ScaleType::Major).unwrap();
            if let Some(sig) = scale.key_signature() {
                assert_eq!(sig.tonality(), Tonality::Major);
                assert_eq!(sig.root(), scale.root_note_type());
            }
        }
    }

    #[test]
    fn test_transposed() {
        let scale = Scale::with_octave(nt("C"), ScaleType::Blues, 2).unwrap();
        let transposed = scale.transposed(nt("G")).unwrap();
        assert_eq!(
            transposed,
            Scale::with_octave(nt("G"), ScaleType::Blues, 2).unwrap()
        );
    }
}
