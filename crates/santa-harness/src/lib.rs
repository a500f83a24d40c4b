//! Test harness for the Secret Santa solver.
//!
//! # Model-Based Testing
//!
//! The `model` module holds a brute-force reference solver that enumerates
//! every valid assignment of a small roster. Scenarios from the `scenario`
//! module are fed to both the model and the real [`santa_core::SecretSantaHat`],
//! and the real result must be one the model accepts.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod model;
pub mod scenario;

pub use model::{ModelHat, receivers_by_index};
pub use scenario::{MAX_PARTICIPANTS, Scenario, ScenarioInput};
