//! Statistics Engine - per-term digit statistics, growth and atoms
//!
//! ## Shannon entropy
//!
//! For a term with digit counts c_d and length L:
//!
//!   H = -Σ_d p_d log₂(p_d),   p_d = c_d / L
//!
//! Digits with zero count are skipped, so a term made of a single repeated
//! digit has H = 0 and a term using 1, 2 and 3 equally has H = log₂ 3.
//!
//! ## Growth
//!
//! The ratio L(k+1) / L(k) tends to Conway's constant λ ≈ 1.303577. The
//! estimate averages the last [`GROWTH_WINDOW`] ratios.

use serde::Serialize;
use std::iter;

use crate::atoms::{AtomDetection, AtomTable};
use crate::types::constants::{CONWAY_CONSTANT, GROWTH_WINDOW};
use crate::types::DigitString;

/// Digit histogram of one term
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DigitCounts {
    length: usize,
    /// Occurrences of '0'..='9'
    digits: [usize; 10],
    /// Non-digit characters, treated as one extra symbol
    non_digits: usize,
}

impl DigitCounts {
    pub fn from_term(term: &str) -> Self {
        let mut counts = Self::default();
        for ch in term.chars() {
            counts.length += 1;
            match ch.to_digit(10) {
                Some(d) => counts.digits[d as usize] += 1,
                None => counts.non_digits += 1,
            }
        }
        counts
    }

    /// Number of characters in the term
    pub fn length(&self) -> usize {
        self.length
    }

    /// Occurrences of `digit`; zero for anything that is not a decimal digit
    pub fn get(&self, digit: char) -> usize {
        digit
            .to_digit(10)
            .map(|d| self.digits[d as usize])
            .unwrap_or(0)
    }

    pub fn ones(&self) -> usize {
        self.digits[1]
    }

    pub fn twos(&self) -> usize {
        self.digits[2]
    }

    pub fn threes(&self) -> usize {
        self.digits[3]
    }

    /// Everything outside {1, 2, 3}
    pub fn other(&self) -> usize {
        self.length - self.ones() - self.twos() - self.threes()
    }

    /// Sum over every bucket; always equals `length()`
    pub fn total(&self) -> usize {
        self.digits.iter().sum::<usize>() + self.non_digits
    }

    /// Shannon entropy in bits, `None` for an empty term
    pub fn entropy(&self) -> Option<f64> {
        if self.length == 0 {
            return None;
        }

        let total = self.length as f64;
        let mut entropy = 0.0;
        for &count in self.digits.iter().chain(iter::once(&self.non_digits)) {
            if count > 0 {
                let p = count as f64 / total;
                entropy -= p * p.log2();
            }
        }

        Some(entropy)
    }
}

/// One row of the statistics table
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TermStatistics {
    pub iteration: usize,
    pub length: usize,
    pub count_1: usize,
    pub count_2: usize,
    pub count_3: usize,
    pub count_other: usize,
    /// Bits
    pub entropy: f64,
}

impl TermStatistics {
    pub fn from_term(iteration: usize, term: &DigitString) -> Self {
        let counts = DigitCounts::from_term(term.as_str());
        Self {
            iteration,
            length: counts.length(),
            count_1: counts.ones(),
            count_2: counts.twos(),
            count_3: counts.threes(),
            count_other: counts.other(),
            // terms are never empty
            entropy: counts.entropy().unwrap_or_default(),
        }
    }
}

/// Everything the presentation layer renders for one sequence
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Statistics {
    pub per_term: Vec<TermStatistics>,
    pub growth_ratios: Vec<f64>,
    /// Undefined (`None`) for a single-term sequence
    pub growth_estimate: Option<f64>,
    pub atom_detections: Vec<AtomDetection>,
}

impl Statistics {
    pub fn lengths(&self) -> Vec<usize> {
        self.per_term.iter().map(|t| t.length).collect()
    }

    /// Signed distance of the growth estimate from Conway's constant
    pub fn conway_deviation(&self) -> Option<f64> {
        self.growth_estimate.map(|lambda| lambda - CONWAY_CONSTANT)
    }
}

/// `L(k+1) / L(k)` for every consecutive pair with non-zero `L(k)`
pub fn growth_ratios(lengths: &[usize]) -> Vec<f64> {
    lengths
        .windows(2)
        .filter(|pair| pair[0] > 0)
        .map(|pair| pair[1] as f64 / pair[0] as f64)
        .collect()
}

/// Mean of the last [`GROWTH_WINDOW`] ratios (or of all, if fewer)
///
/// Returns `None` when there are no ratios at all.
pub fn growth_estimate(ratios: &[f64]) -> Option<f64> {
    if ratios.is_empty() {
        return None;
    }
    let window = &ratios[ratios.len().saturating_sub(GROWTH_WINDOW)..];
    Some(window.iter().sum::<f64>() / window.len() as f64)
}

/// Compute every statistic for a generated sequence
///
/// Stateless: everything is recomputed on each call. The atom table is
/// passed in so front-ends can choose the full or a reduced table.
pub fn compute_statistics(sequence: &[DigitString], atoms: &AtomTable) -> Statistics {
    let per_term: Vec<TermStatistics> = sequence
        .iter()
        .enumerate()
        .map(|(i, term)| TermStatistics::from_term(i, term))
        .collect();

    let lengths: Vec<usize> = per_term.iter().map(|t| t.length).collect();
    let growth_ratios = growth_ratios(&lengths);
    let growth_estimate = growth_estimate(&growth_ratios);

    let atom_detections: Vec<AtomDetection> = sequence
        .iter()
        .map(|term| atoms.detect(term.as_str()))
        .collect();

    tracing::debug!(
        terms = per_term.len(),
        ratios = growth_ratios.len(),
        estimate = ?growth_estimate,
        atoms = atoms.len(),
        "statistics computed"
    );

    Statistics {
        per_term,
        growth_ratios,
        growth_estimate,
        atom_detections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::generate;

    #[test]
    fn test_digit_counts() {
        let counts = DigitCounts::from_term("312211");
        assert_eq!(counts.length(), 6);
        assert_eq!(counts.ones(), 3);
        assert_eq!(counts.twos(), 2);
        assert_eq!(counts.threes(), 1);
        assert_eq!(counts.other(), 0);
        assert_eq!(counts.total(), counts.length());
        assert_eq!(counts.get('2'), 2);
        assert_eq!(counts.get('x'), 0);
    }

    #[test]
    fn test_digit_counts_other_bucket() {
        let counts = DigitCounts::from_term("41a");
        assert_eq!(counts.ones(), 1);
        assert_eq!(counts.other(), 2);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_entropy_single_digit_is_zero() {
        assert_eq!(DigitCounts::from_term("1").entropy(), Some(0.0));
        assert_eq!(DigitCounts::from_term("2222").entropy(), Some(0.0));
    }

    #[test]
    fn test_entropy_empty_is_undefined() {
        assert_eq!(DigitCounts::from_term("").entropy(), None);
    }

    #[test]
    fn test_entropy_uniform() {
        let h = DigitCounts::from_term("21").entropy().unwrap();
        assert!((h - 1.0).abs() < 1e-12);

        let h = DigitCounts::from_term("123321").entropy().unwrap();
        assert!((h - 3.0_f64.log2()).abs() < 1e-12);
    }

    #[test]
    fn test_entropy_skewed() {
        // p = (3/4, 1/4)
        let h = DigitCounts::from_term("1211").entropy().unwrap();
        assert!((h - 0.811_278_124_459_132_8).abs() < 1e-12);
    }

    #[test]
    fn test_growth_ratios() {
        assert_eq!(growth_ratios(&[1, 2, 2, 4]), vec![2.0, 1.0, 2.0]);
        assert!(growth_ratios(&[5]).is_empty());
        assert!(growth_ratios(&[]).is_empty());
    }

    #[test]
    fn test_growth_ratios_skip_zero_length() {
        assert_eq!(growth_ratios(&[0, 3, 6]), vec![2.0]);
    }

    #[test]
    fn test_growth_estimate_window() {
        assert_eq!(growth_estimate(&[]), None);
        assert_eq!(growth_estimate(&[2.0, 4.0]), Some(3.0));

        // exactly five: all of them
        assert_eq!(growth_estimate(&[1.0, 2.0, 3.0, 4.0, 5.0]), Some(3.0));

        // six: the first one drops out
        assert_eq!(growth_estimate(&[100.0, 1.0, 2.0, 3.0, 4.0, 5.0]), Some(3.0));
    }

    #[test]
    fn test_compute_statistics_single_term() {
        let sequence = generate("1", 0).unwrap();
        let stats = compute_statistics(&sequence, AtomTable::conway());

        assert_eq!(stats.per_term.len(), 1);
        assert!(stats.growth_ratios.is_empty());
        assert_eq!(stats.growth_estimate, None);
        assert_eq!(stats.conway_deviation(), None);
        assert_eq!(stats.atom_detections.len(), 1);
    }

    #[test]
    fn test_compute_statistics_rows() {
        let sequence = generate("1", 5).unwrap();
        let stats = compute_statistics(&sequence, AtomTable::conway());

        assert_eq!(stats.lengths(), vec![1, 2, 2, 4, 6, 6]);
        let last = &stats.per_term[5];
        assert_eq!(last.iteration, 5);
        assert_eq!((last.count_1, last.count_2, last.count_3), (3, 2, 1));
        assert_eq!(stats.growth_ratios, vec![2.0, 1.0, 2.0, 1.5, 1.0]);
        assert_eq!(stats.growth_estimate, Some(1.5));
    }

    #[test]
    fn test_compute_statistics_with_injected_table() {
        let sequence = generate("3", 2).unwrap();
        let table = AtomTable::conway().subset(&["Pa", "U"]).unwrap();
        let stats = compute_statistics(&sequence, &table);

        // 3, 13, 1113
        let counts: Vec<usize> = stats.atom_detections.iter().map(|d| d.count).collect();
        assert_eq!(counts, vec![1, 2, 2]);
    }
}
