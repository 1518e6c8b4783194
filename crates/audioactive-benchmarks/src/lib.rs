//! # Audioactive Benchmarks
//!
//! Shared workloads for the criterion benches.
//!
//! | Workload | Final term length | Exercises |
//! |----------|-------------------|-----------|
//! | `("1", 20)` | 408 | transform, stats |
//! | `("1", 40)` | 82 350 | generation, atom scan |
//! | `("3", 50)` | 1 355 550 | generation at the CLI ceiling |
//!
//! ## Usage
//!
//! ```bash
//! cargo bench --package audioactive-benchmarks
//! cargo bench --package audioactive-benchmarks -- atoms
//! ```

use audioactive_core::{generate, DigitString, Sequence};

/// `(seed, iterations)` pairs benchmarked by every group
pub const WORKLOADS: [(&str, usize); 3] = [("1", 20), ("1", 40), ("3", 50)];

/// Generate a benchmark fixture; seeds here are known to be valid
pub fn fixture(seed: &str, iterations: usize) -> Sequence {
    generate(seed, iterations).expect("benchmark seeds are valid")
}

/// The final term of a fixture, used as transform input
pub fn deep_term(seed: &str, iterations: usize) -> DigitString {
    fixture(seed, iterations).last().clone()
}
