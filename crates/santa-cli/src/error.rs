//! CLI error types.

use std::{io, path::PathBuf};

use santa_core::{ConfigError, PairingError, SanityError};
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// A file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A file or directory could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// File or directory that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Writing the report to stdout failed.
    #[error("failed to write report: {0}")]
    Report(#[source] io::Error),

    /// A file is not the JSON we expect.
    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        /// Offending file.
        path: PathBuf,
        /// Parser error.
        #[source]
        source: serde_json::Error,
    },

    /// A participant entry is unusable.
    #[error("participant {name}: {reason}")]
    Participant {
        /// Participant name (the JSON key).
        name: String,
        /// What is wrong with the entry.
        reason: String,
    },

    /// The solver rejected the input or found no assignment.
    #[error(transparent)]
    Pairing(#[from] PairingError),

    /// Saved pairings are not a derangement of the roster.
    #[error("saved pairings failed sanity check: {0}")]
    Sanity(#[from] SanityError),

    /// No seed could be drawn from the OS.
    #[error("entropy source failed: {reason}")]
    Entropy {
        /// Description of the failure.
        reason: String,
    },
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Pairing(PairingError::Config(err))
    }
}

impl CliError {
    /// Process exit code for this error.
    ///
    /// Input problems the user can fix exit with 2, everything else with 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Json { .. } | Self::Participant { .. } => 2,
            Self::Pairing(err) if err.is_config() => 2,
            Self::Read { .. }
            | Self::Write { .. }
            | Self::Report(_)
            | Self::Pairing(_)
            | Self::Sanity(_)
            | Self::Entropy { .. } => 1,
        }
    }
}
