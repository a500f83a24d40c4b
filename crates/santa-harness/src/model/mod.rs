//! Reference model for model-based testing.
//!
//! The model captures what a valid pairing is without any of the solver's
//! machinery. It is an oracle, not a solver: it enumerates permutations and
//! keeps the ones that satisfy every rule.
//!
//! # Design Principles
//!
//! - Simplicity: The model should be obviously correct
//! - Exhaustive: Every valid assignment is listed, in lexicographic order
//! - Deterministic: Same scenario produces same solution set

mod hat;

pub use hat::{ModelHat, receivers_by_index};
