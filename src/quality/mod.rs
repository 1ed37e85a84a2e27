// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Quality catalogues.
//!
//! Static tables describing chord and scale qualities as Nashville-number
//! lists, plus the key signatures of the circle of fifths. Everything here
//! is data; the spelling engine and the harmony types consume it.

pub mod chord_type;
pub mod key_signature;
pub mod nashville;
pub mod scale_type;

pub use chord_type::ChordType;
pub use key_signature::KeySignature;
pub use nashville::NashvilleNumber;
pub use scale_type::{ScaleType, Step, Tonality};
