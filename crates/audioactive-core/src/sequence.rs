//! Sequence Generator - iterates the transform from a validated seed
//!
//! Term length grows by roughly Conway's constant (~1.3036) per step, so
//! callers bound the iteration count themselves; the generator does not.

use serde::Serialize;
use std::ops::Deref;

use crate::error::Result;
use crate::types::DigitString;

/// An ordered, immutable list of terms `[seed, T(seed), T(T(seed)), ...]`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Sequence {
    terms: Vec<DigitString>,
}

impl Sequence {
    /// Build `iterations + 1` terms starting from an already validated seed
    pub fn from_seed(seed: DigitString, iterations: usize) -> Self {
        let span = tracing::info_span!("generate", seed = %seed, iterations);
        let _enter = span.enter();

        let mut terms = Vec::with_capacity(iterations + 1);
        terms.push(seed);

        for i in 1..=iterations {
            let next = terms[i - 1].successor();
            tracing::debug!(iteration = i, length = next.len(), "term generated");
            terms.push(next);
        }

        tracing::info!(
            terms = terms.len(),
            final_length = terms[terms.len() - 1].len(),
            "sequence generated"
        );

        Self { terms }
    }

    /// Initial term
    pub fn seed(&self) -> &DigitString {
        &self.terms[0]
    }

    /// Final term
    pub fn last(&self) -> &DigitString {
        &self.terms[self.terms.len() - 1]
    }

    pub fn terms(&self) -> &[DigitString] {
        &self.terms
    }

    /// Number of transform applications (`len() - 1`)
    pub fn iterations(&self) -> usize {
        self.terms.len() - 1
    }

    /// Length of every term, in order
    pub fn lengths(&self) -> Vec<usize> {
        self.terms.iter().map(DigitString::len).collect()
    }
}

impl Deref for Sequence {
    type Target = [DigitString];

    fn deref(&self) -> &Self::Target {
        &self.terms
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a DigitString;
    type IntoIter = std::slice::Iter<'a, DigitString>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

/// Validate `seed` and generate `iterations` successive terms
///
/// Fails with `InvalidSeed` before any term is produced when the seed is
/// empty or holds a character outside {1, 2, 3}.
pub fn generate(seed: &str, iterations: usize) -> Result<Sequence> {
    let seed = DigitString::seed(seed)?;
    Ok(Sequence::from_seed(seed, iterations))
}
