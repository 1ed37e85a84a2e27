// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Spelled harmonic structures: interval sets, chords, and scales.

pub mod chord;
pub mod interval_set;
pub mod scale;

pub use chord::Chord;
pub use interval_set::IntervalSet;
pub use scale::Scale;
