//! Core type definitions for the look-and-say engine
//!
//! A term of the sequence is a [`DigitString`]: a non-empty string of
//! decimal digits. Seeds are further restricted to the alphabet {1, 2, 3},
//! which is closed under the transform for every seed without a run of
//! four or more equal digits.

use serde::Serialize;
use std::fmt;

use crate::error::{AudioactiveError, Result};
use crate::transform::{encode_runs, Runs};

/// DigitString - one immutable term of a look-and-say sequence
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DigitString(String);

impl DigitString {
    /// Validate a user-supplied seed
    ///
    /// Fails with [`AudioactiveError::InvalidSeed`] when the seed is empty
    /// or holds any character outside {1, 2, 3}.
    pub fn seed(seed: &str) -> Result<Self> {
        if seed.is_empty() {
            return Err(AudioactiveError::invalid_seed(seed, "seed is empty"));
        }

        if let Some((position, ch)) = seed
            .chars()
            .enumerate()
            .find(|(_, ch)| !constants::ALPHABET.contains(ch))
        {
            return Err(AudioactiveError::invalid_seed(
                seed,
                format!("character {:?} at position {} is not in {{1, 2, 3}}", ch, position),
            ));
        }

        Ok(Self(seed.to_string()))
    }

    /// The next term: run-length encoding of this one
    pub fn successor(&self) -> Self {
        Self(encode_runs(&self.0))
    }

    /// Maximal runs of identical digits, left to right
    pub fn runs(&self) -> Runs<'_> {
        Runs::new(&self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits (every digit is one byte)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; a term is never empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for DigitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const PREVIEW: usize = 32;
        if self.0.len() <= PREVIEW {
            write!(f, "DigitString({})", self.0)
        } else {
            write!(f, "DigitString({}.. len={})", &self.0[..PREVIEW], self.0.len())
        }
    }
}

impl fmt::Display for DigitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DigitString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for DigitString {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for DigitString {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<DigitString> for String {
    fn from(term: DigitString) -> Self {
        term.0
    }
}

/// Engine constants
pub mod constants {
    /// Digits a seed may contain
    pub const ALPHABET: [char; 3] = ['1', '2', '3'];

    /// Conway's constant λ, the asymptotic growth factor of term length
    pub const CONWAY_CONSTANT: f64 = 1.303_577_269_034_296;

    /// Number of trailing ratios averaged for the λ estimate
    pub const GROWTH_WINDOW: usize = 5;

    /// Seed used when none is supplied
    pub const DEFAULT_SEED: &str = "1";

    /// Iterations used when none are supplied
    pub const DEFAULT_ITERATIONS: usize = 10;

    /// Practical iteration ceiling for front-ends (term length ~1e5 at 40)
    pub const MAX_ITERATIONS: usize = 50;
}
