// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Ordered note sets with octave assignment.
//!
//! An `IntervalSet` is the resolved form of a root plus a degree list:
//! the spelled note types in degree order, each placed at an octave so the
//! sequence ascends in pitch. A pitch-class drop between neighbors means
//! the set crossed an octave boundary; wide chords can cross twice, so
//! assignment watches for a second drop after the first (an A♯9 needs its
//! ninth two octaves above the base).

use tracing::debug;

use crate::pitch::{Note, NoteType, Octave};
use crate::quality::NashvilleNumber;
use crate::spelling::{resolve_note_types, SpellingError};

/// Resolved, octave-placed note sequence shared by chords and scales
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalSet {
    pub(crate) root: NoteType,
    pub(crate) note_types: Vec<NoteType>,
    pub(crate) notes: Vec<Note>,
    pub(crate) octave: Octave,
    pub(crate) max_octave: Octave,
}

impl IntervalSet {
    /// Resolve a degree list against a root and place the notes at a base
    /// octave. Requests above the set's octave ceiling are clamped.
    pub fn new(
        root: NoteType,
        numbers: &[NashvilleNumber],
        octave: Octave,
    ) -> Result<Self, SpellingError> {
        let root = root.normalized();
        let note_types = resolve_note_types(root, numbers)?;

        // The octave ceiling tracks the note that ends up highest after
        // any inversion: with n notes and n-1 inversions, that is the
        // second-to-last note type.
        let max_octave = note_types[note_types.len().saturating_sub(2)].max_octave();

        let octave = clamp_octave(octave, max_octave);
        let octaves = assign_octaves(&note_types, octave);
        let notes = note_types
            .iter()
            .zip(octaves)
            .map(|(nt, oct)| Note::new(*nt, oct))
            .collect();

        Ok(Self {
            root,
            note_types,
            notes,
            octave,
            max_octave,
        })
    }

    /// Get the root note type
    pub fn root_note_type(&self) -> NoteType {
        self.root
    }

    /// Get the spelled note types in degree order
    pub fn note_types(&self) -> &[NoteType] {
        &self.note_types
    }

    /// Get the octave-placed notes in degree order
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Get the root note with its octave placement
    pub fn root_note(&self) -> Note {
        self.notes[0]
    }

    /// Get the current base octave
    pub fn octave(&self) -> Octave {
        self.octave
    }

    /// Get the highest base octave this set can be placed at
    pub fn max_octave(&self) -> Octave {
        self.max_octave
    }

    /// Move the set to a new base octave, clamping to the octave ceiling.
    /// Every note keeps its wrap offset relative to the base.
    pub fn set_octave(&mut self, octave: Octave) {
        let octave = clamp_octave(octave, self.max_octave);
        self.octave = octave;
        let octaves = assign_octaves(&self.note_types, octave);
        for (note, oct) in self.notes.iter_mut().zip(octaves) {
            note.set_octave(oct);
        }
    }
}

fn clamp_octave(octave: Octave, max_octave: Octave) -> Octave {
    if octave > max_octave {
        debug!(requested = octave, max = max_octave, "octave clamped");
        max_octave
    } else {
        octave
    }
}

/// Assign an octave to each note type so the sequence ascends in pitch.
/// Equal pitch classes stay in the same octave; a second pitch-class drop
/// pushes the remainder up a further octave.
fn assign_octaves(note_types: &[NoteType], base: Octave) -> Vec<Octave> {
    let mut octaves = vec![base; note_types.len()];

    for i in 1..note_types.len() {
        if note_types[i].pitch_class() < note_types[i - 1].pitch_class() {
            for octave in octaves.iter_mut().skip(i) {
                *octave = base + 1;
            }
            for j in (i + 1)..note_types.len() {
                if note_types[j].pitch_class() < note_types[j - 1].pitch_class() {
                    for octave in octaves.iter_mut().skip(j) {
                        *octave = base + 2;
                    }
                    break;
                }
            }
            break;
        }
    }

    octaves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch::NoteType;
    use crate::quality::{ChordType, ScaleType};

    fn nt(s: &str) -> NoteType {
        NoteType::from_str(s).unwrap()
    }

    #[test]
    fn test_no_wrap() {
        let set = IntervalSet::new(nt("C"), ChordType::Major.numbers(), 4).unwrap();
        let pitches: Vec<u16> = set.notes().iter().map(|n| n.pitch()).collect();
        assert_eq!(pitches, [48, 52, 55]);
    }

    #[test]
    fn test_single_wrap() {
        // G major: B (pc 11) down to D (pc 2) crosses the octave
        let set = IntervalSet::new(nt("G"), ChordType::Major.numbers(), 4).unwrap();
        let pitches: Vec<u16> = set.notes().iter().map(|n| n.pitch()).collect();
        assert_eq!(pitches, [55, 59, 62]);
    }

    #[test]
    fn test_double_wrap() {
        // A#9 wraps at Cx and again at B#
        let set = IntervalSet::new(nt("A#"), ChordType::Nine.numbers(), 3).unwrap();
        let pitches: Vec<u16> = set.notes().iter().map(|n| n.pitch()).collect();
        assert_eq!(pitches, [46, 50, 53, 56, 60]);
    }

    #[test]
    fn test_ascending_invariant_across_scales() {
        for scale_type in ScaleType::ALL {
            let set = IntervalSet::new(nt("Eb"), scale_type.numbers(), 3).unwrap();
            for pair in set.notes().windows(2) {
                assert!(
                    pair[0].pitch() < pair[1].pitch(),
                    "{:?} does not ascend from Eb",
                    scale_type
                );
            }
        }
    }

    #[test]
    fn test_octave_clamp() {
        let max = IntervalSet::new(nt("C"), ChordType::Major.numbers(), 0)
            .unwrap()
            .max_octave();
        let clamped = IntervalSet::new(nt("C"), ChordType::Major.numbers(), 99).unwrap();
        assert_eq!(clamped.octave(), max);

        let mut set = IntervalSet::new(nt("C"), ChordType::Major.numbers(), 2).unwrap();
        set.set_octave(99);
        assert_eq!(set.octave(), max);
    }

    #[test]
    fn test_set_octave_preserves_wrap_offsets() {
        let mut set = IntervalSet::new(nt("G"), ChordType::Major.numbers(), 4).unwrap();
        set.set_octave(2);
        let pitches: Vec<u16> = set.notes().iter().map(|n| n.pitch()).collect();
        assert_eq!(pitches, [31, 35, 38]);
    }

    #[test]
    fn test_natural_root_normalizes() {
        let natural = NoteType::from_str("Cn").unwrap();
        let set = IntervalSet::new(natural, ChordType::Major.numbers(), 4).unwrap();
        assert_eq!(set.root_note_type(), nt("C"));
    }
}
