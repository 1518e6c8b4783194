//! # Audioactive Core
//!
//! Look-and-say sequence ("audioactive decay") engine over the digits
//! {1, 2, 3}, with descriptive statistics on the generated terms.
//!
//! This crate provides:
//! - `transform` - run-length encoding of one term into the next
//! - `Sequence` - the seed followed by successive transforms
//! - `compute_statistics` - lengths, digit counts, Shannon entropy,
//!   growth ratios, the estimate of Conway's constant and atom detection
//! - `AtomTable` - Conway's 92 common elements, or any injected table
//!
//! ## Pipeline
//!
//! ```text
//!   seed ──validate──► term₀ ──T──► term₁ ──T──► ... ──T──► termₙ
//!                                                          │
//!          ┌───────────────────────────────────────────────┘
//!          ▼
//!   per-term: length, counts(1,2,3), entropy, atoms
//!   whole:    growth ratios, λ estimate (mean of last 5)
//! ```
//!
//! Everything here is pure and synchronous; presentation (tables, charts,
//! CSV) belongs to the caller.

pub mod atoms;
pub mod error;
pub mod sequence;
pub mod stats;
pub mod transform;
pub mod types;

pub use atoms::*;
pub use error::*;
pub use sequence::*;
pub use stats::*;
pub use transform::*;
pub use types::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::atoms::{Atom, AtomDetection, AtomTable};
    pub use crate::error::{AudioactiveError, Result};
    pub use crate::sequence::{generate, Sequence};
    pub use crate::stats::{compute_statistics, Statistics, TermStatistics};
    pub use crate::transform::transform;
    pub use crate::types::*;
}
