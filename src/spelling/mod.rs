// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Note-spelling resolution.
//!
//! Given a root spelling and a list of Nashville numbers, this engine
//! derives the correctly spelled note type for each degree. The target
//! letter is forced by the degree (degree n lands n-1 letters above the
//! root), so the work is in choosing the accidental that makes the letter
//! land on the required pitch class. Resolution runs up to four stages:
//! a first candidate carrying the root's accidental, an additive
//! correction, a letter-preserving retry, and a table of root-accidental
//! specific respellings. Degrees that survive all four stages unresolved
//! are reported as a [`SpellingError`].

use thiserror::Error;
use tracing::trace;

use crate::pitch::{Accidental, NoteType};
use crate::quality::NashvilleNumber;

/// A scale degree that could not be spelled from the given root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no spelling for {number} (unresolved offset {offset})")]
pub struct SpellingError {
    /// The degree that failed to resolve
    pub number: NashvilleNumber,
    /// Remaining pitch-class offset after the letter-preserving retry
    pub offset: i8,
}

/// Resolve the spelled note types for a root and a degree list.
///
/// The first number is expected to be the root degree; its slot always
/// holds the (normalized) root spelling.
pub fn resolve_note_types(
    root: NoteType,
    numbers: &[NashvilleNumber],
) -> Result<Vec<NoteType>, SpellingError> {
    let root = root.normalized();
    let mut resolved = Vec::with_capacity(numbers.len());
    resolved.push(root);

    for number in numbers.iter().skip(1) {
        let previous = resolved[resolved.len() - 1];
        resolved.push(resolve_degree(root, previous, *number)?);
    }

    Ok(resolved)
}

/// Resolve a single degree against a (normalized) root spelling.
///
/// `previous` is the note type resolved for the preceding degree; it feeds
/// the natural-collapse normalization.
pub fn resolve_degree(
    root: NoteType,
    previous: NoteType,
    number: NashvilleNumber,
) -> Result<NoteType, SpellingError> {
    let target_letter = root.letter().advance(number.degree().saturating_sub(1) % 7);
    let required_pc = (root.pitch_class() + number.distance()) % 12;

    // First candidate: the target letter carrying the root's accidental.
    // A natural root pre-applies the degree's own accidental instead.
    let mut candidate = NoteType::new(target_letter, root.accidental());
    if root.is_natural() {
        candidate = apply_accidental(candidate, number.accidental());
    }

    let offset = required_pc as i8 - candidate.pitch_class() as i8;
    if offset == 0 {
        return Ok(candidate);
    }

    // Second attempt: apply the offset as an accidental delta. Offsets
    // outside the double-accidental range map to a no-op here and fall
    // through to the later stages.
    let delta = match offset {
        -2 => Accidental::DoubleFlat,
        -1 => Accidental::Flat,
        1 => Accidental::Sharp,
        2 => Accidental::DoubleSharp,
        _ => Accidental::Plain,
    };

    candidate = apply_accidental(candidate, delta);
    if candidate.is_natural() && letters_follow(previous, candidate) {
        candidate = NoteType::new(candidate.letter(), Accidental::Plain);
    }

    if candidate.pitch_class() == required_pc {
        return Ok(candidate);
    }

    // Third attempt: keep the letter the correction landed on, but spell
    // it with the delta accidental directly.
    candidate = NoteType::new(candidate.letter(), delta);
    if candidate.pitch_class() == required_pc {
        return Ok(candidate);
    }

    // Fourth attempt: root-accidental specific respellings for the wrap
    // cases the additive correction cannot reach.
    let offset = required_pc as i8 - candidate.pitch_class() as i8;
    trace!(
        root = %root,
        number = %number,
        offset,
        "spelling fell through to root-accidental correction"
    );

    let corrected = match root.accidental() {
        Accidental::DoubleFlat => match offset {
            9 => Some(NoteType::new(
                candidate.letter().previous(),
                Accidental::Flat,
            )),
            -1 => Some(NoteType::new(target_letter, Accidental::DoubleFlat)),
            _ => None,
        },
        Accidental::Flat => match offset {
            -1 | 1 => Some(NoteType::new(candidate.letter(), Accidental::Sharp)),
            _ => None,
        },
        Accidental::Sharp => match offset {
            -1 | 1 => Some(NoteType::new(candidate.letter(), Accidental::Flat)),
            _ => None,
        },
        Accidental::DoubleSharp => match offset {
            -9 => Some(NoteType::new(candidate.letter().next(), Accidental::Sharp)),
            _ => None,
        },
        Accidental::Plain | Accidental::Natural => match offset {
            -11 => Some(NoteType::new(candidate.letter(), Accidental::Sharp)),
            11 => Some(NoteType::new(candidate.letter(), Accidental::Flat)),
            _ => None,
        },
    };

    corrected.ok_or(SpellingError { number, offset })
}

/// Apply an accidental delta to a spelling, respelling on the same letter
/// while the combined offset stays in double-accidental range and spilling
/// to the adjacent letter past it. Plain is a no-op.
pub fn apply_accidental(note_type: NoteType, accidental: Accidental) -> NoteType {
    if accidental == Accidental::Plain {
        return note_type;
    }

    let combined = note_type.accidental().offset() + accidental.offset();
    if (-2..=2).contains(&combined) {
        NoteType::new(note_type.letter(), Accidental::from_offset(combined))
    } else if combined > 2 {
        let gap = note_type.letter().gap_to_next() as i8;
        NoteType::new(
            note_type.letter().next(),
            Accidental::from_offset(combined - gap),
        )
    } else {
        let gap = note_type.letter().previous().gap_to_next() as i8;
        NoteType::new(
            note_type.letter().previous(),
            Accidental::from_offset(combined + gap),
        )
    }
}

/// Whether `second`'s letter is the cyclic successor of `first`'s
fn letters_follow(first: NoteType, second: NoteType) -> bool {
    first.letter().next() == second.letter()
}
