// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! # enharmonic
//!
//! A spelled music-pitch library. Chords and scales are built from a root
//! spelling and a quality, producing correctly spelled note names (C♯ and
//! D♭ are different notes here) placed at ascending octaves, with chord
//! inversion, transposition, key signatures, and a chord-progression
//! graph.
//!
//! ```
//! use enharmonic::{Chord, ChordType, NoteType};
//!
//! let mut chord = Chord::with_octave(NoteType::from_str("C").unwrap(), ChordType::Major, 4)?;
//! assert_eq!(chord.name(), "Cmaj");
//!
//! chord.invert();
//! assert_eq!(chord.name(), "Cmaj/E");
//! # Ok::<(), enharmonic::SpellingError>(())
//! ```

pub mod harmony;
pub mod pitch;
pub mod progression;
pub mod quality;
pub mod spelling;

pub use harmony::{Chord, IntervalSet, Scale};
pub use pitch::{Accidental, Letter, MidiNote, Note, NoteType, Octave};
pub use progression::ChordProgression;
pub use quality::{ChordType, KeySignature, NashvilleNumber, ScaleType, Step, Tonality};
pub use spelling::SpellingError;
