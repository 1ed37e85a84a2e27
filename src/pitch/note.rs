// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Notes placed at an absolute octave.
//!
//! The octave convention is fixed here: absolute pitch = octave * 12 +
//! pitch class, with MIDI note 0 at octave 0. Extreme spellings can exceed
//! the MIDI ceiling; `midi_note` reports only in-range values.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{MidiNote, NoteType, Octave, MIDI_MAX};

/// A spelled note at an absolute octave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Note {
    note_type: NoteType,
    octave: Octave,
}

impl Note {
    /// Create a note from a note type and octave
    pub fn new(note_type: NoteType, octave: Octave) -> Self {
        Self { note_type, octave }
    }

    /// Get the note type
    pub fn note_type(&self) -> NoteType {
        self.note_type
    }

    /// Get the octave
    pub fn octave(&self) -> Octave {
        self.octave
    }

    /// Move the note to a different octave
    pub fn set_octave(&mut self, octave: Octave) {
        self.octave = octave;
    }

    /// Absolute pitch (octave * 12 + pitch class), unbounded above
    pub fn pitch(&self) -> u16 {
        self.octave as u16 * 12 + self.note_type.pitch_class() as u16
    }

    /// MIDI note number, if the pitch is within the MIDI range
    pub fn midi_note(&self) -> Option<MidiNote> {
        let pitch = self.pitch();
        if pitch <= MIDI_MAX as u16 {
            Some(pitch as MidiNote)
        } else {
            None
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.note_type, self.octave)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch::{Accidental, Letter};

    #[test]
    fn test_pitch() {
        let c4 = Note::new(NoteType::new(Letter::C, Accidental::Plain), 4);
        assert_eq!(c4.pitch(), 48);
        assert_eq!(c4.midi_note(), Some(48));

        let a0 = Note::new(NoteType::new(Letter::A, Accidental::Plain), 0);
        assert_eq!(a0.pitch(), 9);
    }

    #[test]
    fn test_enharmonic_notes_share_pitch() {
        let c_sharp = Note::new(NoteType::new(Letter::C, Accidental::Sharp), 3);
        let d_flat = Note::new(NoteType::new(Letter::D, Accidental::Flat), 3);
        assert_eq!(c_sharp.pitch(), d_flat.pitch());
        assert_ne!(c_sharp, d_flat);
    }

    #[test]
    fn test_midi_ceiling() {
        let g10 = Note::new(NoteType::new(Letter::G, Accidental::Plain), 10);
        assert_eq!(g10.pitch(), 127);
        assert_eq!(g10.midi_note(), Some(127));

        let a10 = Note::new(NoteType::new(Letter::A, Accidental::Plain), 10);
        assert_eq!(a10.pitch(), 129);
        assert_eq!(a10.midi_note(), None);
    }

    #[test]
    fn test_set_octave() {
        let mut note = Note::new(NoteType::new(Letter::E, Accidental::Flat), 2);
        assert_eq!(note.pitch(), 27);
        note.set_octave(5);
        assert_eq!(note.pitch(), 63);
    }

    #[test]
    fn test_display() {
        let note = Note::new(NoteType::new(Letter::F, Accidental::Sharp), 4);
        assert_eq!(note.to_string(), "F\u{266f}4");
    }
}
