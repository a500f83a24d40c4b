//! Secret Santa command-line front end.
//!
//! Reads participants and constraints from JSON, draws pairings with
//! `santa-core`, and saves them for whatever delivers the news to each
//! giver.
//!
//! ## Architecture
//!
//! ```text
//! santa-cli
//!   ├─ participants   (names file -> Roster)
//!   ├─ constraints    (constraints file -> always/never pairs)
//!   ├─ seed           (SeedSource: OS entropy or fixed)
//!   ├─ pairings       (save/load unencrypted_pairings.json, report)
//!   └─ create_pairings / check_pairings
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod constraints;
mod error;
pub mod pairings;
pub mod participants;
pub mod seed;

use std::path::{Path, PathBuf};

pub use constraints::{ConstraintSet, read_constraints};
pub use error::CliError;
pub use pairings::{PAIRINGS_FILE, load_pairings, save_pairings, write_report};
pub use participants::{Participant, read_participants};
use santa_core::{Assignment, HatConfig, SecretSantaHat, sanity_check};
pub use seed::{FixedSeed, SeedSource, SystemSeed};

/// Inputs for drawing pairings.
#[derive(Debug, Clone)]
pub struct PairOptions {
    /// Participants file.
    pub people_path: PathBuf,
    /// Optional constraints file.
    pub constraints_path: Option<PathBuf>,
    /// Seed to use; drawn from the seed source when absent.
    pub seed: Option<u64>,
    /// Directory for saved pairings.
    pub output_dir: PathBuf,
    /// Solver configuration.
    pub hat: HatConfig,
}

impl PairOptions {
    /// Options with defaults for everything but the participants file.
    pub fn new(people_path: impl Into<PathBuf>) -> Self {
        Self {
            people_path: people_path.into(),
            constraints_path: None,
            seed: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            hat: HatConfig::default(),
        }
    }
}

/// Default directory for saved pairings.
pub const DEFAULT_OUTPUT_DIR: &str = "data";

/// Result of a successful draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairOutcome {
    /// Seed the draw used.
    pub seed: u64,
    /// The pairings.
    pub assignment: Assignment,
    /// Where the pairings were saved.
    pub saved_to: PathBuf,
}

/// Draw pairings for the participants and save them.
///
/// The seed actually used is logged at `info` so a draw can be repeated.
pub fn create_pairings(
    options: &PairOptions,
    seeds: &impl SeedSource,
) -> Result<PairOutcome, CliError> {
    let participants = read_participants(&options.people_path)?;
    let roster = participants::roster(&participants)?;
    tracing::debug!(
        "Read {} participants from {}",
        roster.len(),
        options.people_path.display()
    );

    let constraints = match &options.constraints_path {
        Some(path) => read_constraints(path)?,
        None => ConstraintSet::default(),
    };
    if !constraints.is_empty() {
        tracing::debug!(
            always = constraints.always.len(),
            never = constraints.never.len(),
            "Loaded constraints"
        );
    }

    let seed = match options.seed {
        Some(seed) => seed,
        None => seeds.fresh_seed()?,
    };
    tracing::info!("Using random seed {seed}");

    let hat = SecretSantaHat::new(options.hat);
    let assignment = hat.draw(&roster, seed, &constraints.always, &constraints.never)?;
    sanity_check(&assignment, &roster)?;

    let saved_to = save_pairings(&options.output_dir, &assignment)?;
    tracing::info!("Saved {} pairings to {}", assignment.len(), saved_to.display());

    Ok(PairOutcome { seed, assignment, saved_to })
}

/// Reload saved pairings and verify them against the participants file.
pub fn check_pairings(people_path: &Path, output_dir: &Path) -> Result<Assignment, CliError> {
    let participants = read_participants(people_path)?;
    let roster = participants::roster(&participants)?;
    let assignment = load_pairings(output_dir)?;
    sanity_check(&assignment, &roster)?;
    tracing::info!("{} saved pairings are valid", assignment.len());
    Ok(assignment)
}
