//! Secret Santa pairing solver.
//!
//! Computes a random derangement of a roster (nobody draws themselves) that
//! honours mandatory ("always") and forbidden ("never") pairings. The crate
//! is pure computation: no I/O, no global state, no hidden randomness.
//!
//! ## Architecture
//!
//! ```text
//! santa-core
//!   ├─ SecretSantaHat     (seeding, retries against never-constraints)
//!   │    ├─ derangement   (shuffle-and-reject, no constraints)
//!   │    └─ search        (backtracking completion around always-pairs)
//!   ├─ validate           (never-constraint check, integrity check)
//!   └─ Roster / Constraint / Assignment
//! ```
//!
//! # Invariants
//!
//! Every [`Assignment`] returned by [`SecretSantaHat::draw`]:
//!
//! - has the roster as both its givers and its receivers
//! - maps nobody to themselves
//! - contains every always-constraint
//! - contains no never-constraint (see [`NeverPolicy`] for the one opt-out)
//!
//! Given the same roster order, seed, and constraints, the result is
//! identical across runs and platforms.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod assignment;
mod config;
mod constraint;
pub mod derangement;
mod error;
mod hat;
mod roster;
pub mod search;
pub mod validate;

pub use assignment::Assignment;
pub use config::{HatConfig, NeverPolicy};
pub use constraint::Constraint;
pub use error::{ConfigError, InfeasibleError, PairingError, SanityError};
pub use hat::{SecretSantaHat, secret_santa_hat, solve_pairing};
pub use roster::Roster;
pub use validate::{check_never_constraints, sanity_check};
