// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Spelled pitch primitives.
//!
//! This module provides the leaves of the pitch model: the seven cyclic
//! note letters, the accidental set, spelled note identities (letter +
//! accidental), and notes placed at an absolute octave.

pub mod accidental;
pub mod letter;
pub mod note;
pub mod note_type;

pub use accidental::Accidental;
pub use letter::Letter;
pub use note::Note;
pub use note_type::NoteType;

/// MIDI note number type (0-127)
pub type MidiNote = u8;

/// Absolute octave number type
pub type Octave = u8;

/// Highest representable MIDI note
pub const MIDI_MAX: MidiNote = 127;
