// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chords and their inversion state machine.
//!
//! A chord with n notes has n-1 inversions. Each inversion raises the
//! octave of the lowest remaining note, so the bass rotates through the
//! chord tones; the n-th inversion restores the original voicing. Default
//! octaves are cached at construction and every inversion is expressed
//! relative to them.

use std::fmt;

use crate::pitch::{Note, NoteType, Octave};
use crate::quality::ChordType;
use crate::spelling::SpellingError;

use super::IntervalSet;

/// A spelled chord with inversion state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chord {
    set: IntervalSet,
    chord_type: ChordType,
    inversion: usize,
    default_octaves: Vec<Octave>,
    name: String,
}

impl Chord {
    /// Build a chord at the lowest octave
    pub fn new(root: NoteType, chord_type: ChordType) -> Result<Self, SpellingError> {
        Chord::with_octave(root, chord_type, 0)
    }

    /// Build a chord at a base octave (clamped to the chord's ceiling)
    pub fn with_octave(
        root: NoteType,
        chord_type: ChordType,
        octave: Octave,
    ) -> Result<Self, SpellingError> {
        let set = IntervalSet::new(root, chord_type.numbers(), octave)?;
        let default_octaves = set.notes().iter().map(|n| n.octave()).collect();
        let name = format!("{}{}", set.root_note_type(), chord_type.symbol());
        Ok(Self {
            set,
            chord_type,
            inversion: 0,
            default_octaves,
            name,
        })
    }

    /// Get the chord's display name, including the slash bass when inverted
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the chord type
    pub fn chord_type(&self) -> ChordType {
        self.chord_type
    }

    /// Get the root note type
    pub fn root_note_type(&self) -> NoteType {
        self.set.root_note_type()
    }

    /// Get the spelled note types in degree order
    pub fn note_types(&self) -> &[NoteType] {
        self.set.note_types()
    }

    /// Get the notes in degree order (inverted notes sit an octave up)
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

    /// Get the highest base octave this chord can be placed at
    pub fn max_octave(&self) -> Octave {
        self.set.max_octave()
    }

    /// Get the current inversion number (0 when uninverted)
    pub fn inversion_number(&self) -> usize {
        self.inversion
    }

    /// Get the note type currently sounding in the bass
    pub fn bass_note_type(&self) -> NoteType {
        self.set.note_types()[self.inversion]
    }

    /// Get the notes rotated so the bass note is first.
    ///
    /// The rotation keeps degree order. For chords whose default voicing
    /// spans less than an octave the result ascends in pitch after any
    /// inversion; wider chords (ninths and above) can interleave, since
    /// a raised low note may still sit below the upper extensions.
    pub fn voiced_notes(&self) -> Vec<Note> {
        let notes = self.set.notes();
        let mut voiced = Vec::with_capacity(notes.len());
        voiced.extend_from_slice(&notes[self.inversion..]);
        voiced.extend_from_slice(&notes[..self.inversion]);
        voiced
    }

    /// Move the chord to a new base octave, keeping the current inversion
    pub fn set_octave(&mut self, octave: Octave) {
        self.set.set_octave(octave);
        self.default_octaves = self.set.notes().iter().map(|n| n.octave()).collect();
        self.apply_inversion_octaves();
    }

    /// Advance to the next inversion; the n-th inversion wraps back to the
    /// original voicing
    pub fn invert(&mut self) {
        self.inversion = (self.inversion + 1) % self.set.note_types().len();
        self.name = format!("{}{}", self.set.root_note_type(), self.chord_type.symbol());

        if self.inversion != 0 {
            // Same chord, with the bass note tacked onto the name
            self.name
                .push_str(&format!("/{}", self.set.note_types()[self.inversion]));
            self.apply_inversion_octaves();
        } else {
            self.restore_default_octaves();
        }
    }

    /// Jump to a specific inversion. Out-of-range targets wrap modulo the
    /// note count; negative targets count backward.
    pub fn set_to_inversion(&mut self, inversion: i32) {
        if self.inversion != 0 {
            self.reset_inversion();
        }

        let len = self.set.note_types().len() as i32;
        let target = inversion.rem_euclid(len);

        for _ in 0..target {
            self.invert();
        }
    }

    /// Return to the uninverted voicing
    pub fn reset_inversion(&mut self) {
        self.inversion = 0;
        self.name = format!("{}{}", self.set.root_note_type(), self.chord_type.symbol());
        self.restore_default_octaves();
    }

    /// Rebuild this chord on a new root, keeping quality and base octave
    pub fn transposed(&self, new_root: NoteType) -> Result<Chord, SpellingError> {
        Chord::with_octave(new_root, self.chord_type, self.set.octave())
    }

    fn apply_inversion_octaves(&mut self) {
        for i in 0..self.inversion {
            let raised = self.default_octaves[i] + 1;
            self.set.notes[i].set_octave(raised);
        }
    }

    fn restore_default_octaves(&mut self) {
        for (note, octave) in self.set.notes.iter_mut().zip(&self.default_octaves) {
            note.set_octave(*octave);
        }
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
