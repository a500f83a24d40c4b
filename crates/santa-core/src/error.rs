//! Solver error types.

use thiserror::Error;

/// The roster or constraint set handed to the solver is malformed.
///
/// Configuration errors are never retried: they point at a bug in the
/// participant or constraint input and must be fixed by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The same name appears twice in the roster.
    #[error("duplicate participant: {name}")]
    DuplicateParticipant {
        /// The repeated name.
        name: String,
    },

    /// A constraint is not a `(giver, receiver)` pair.
    #[error("malformed constraint: expected 2 names, got {len}")]
    MalformedConstraint {
        /// Number of names in the offending constraint.
        len: usize,
    },

    /// A constraint names somebody who is not in the roster.
    #[error("unknown participant: {name}")]
    UnknownParticipant {
        /// The unknown name.
        name: String,
    },

    /// A constraint pairs a participant with themselves.
    #[error("constraint pairs {name} with themselves")]
    SelfConstraint {
        /// The participant on both sides of the constraint.
        name: String,
    },

    /// A giver is bound by more than one always-constraint.
    #[error("{giver} is bound as a giver by more than one always-constraint")]
    DuplicateGiver {
        /// The giver bound twice.
        giver: String,
    },

    /// A receiver is bound by more than one always-constraint.
    #[error("{receiver} is bound as a receiver by more than one always-constraint")]
    DuplicateReceiver {
        /// The receiver bound twice.
        receiver: String,
    },
}

/// No assignment satisfying every constraint could be produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InfeasibleError {
    /// A derangement needs at least two participants.
    #[error("roster too small: {size} participant(s), need at least 2")]
    RosterTooSmall {
        /// Number of participants in the roster.
        size: usize,
    },

    /// The same pair is both required and forbidden.
    #[error("{giver} -> {receiver} is both an always- and a never-constraint")]
    Contradiction {
        /// Giver of the contradictory pair.
        giver: String,
        /// Receiver of the contradictory pair.
        receiver: String,
    },

    /// The always-constraints leave a single participant who can only give
    /// to themselves.
    #[error("always-constraints force {name} to give to themselves")]
    ForcedSelfPairing {
        /// The stranded participant.
        name: String,
    },

    /// Every attempt violated at least one never-constraint.
    #[error("never-constraints still violated after {attempts} attempts")]
    RetriesExhausted {
        /// Number of attempts made.
        attempts: u32,
    },

    /// The derangement generator hit its shuffle cap.
    #[error("no derangement found after {shuffles} shuffles")]
    ShuffleLimit {
        /// Number of shuffles tried.
        shuffles: u32,
    },
}

/// An assignment failed the post-hoc integrity check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SanityError {
    /// The givers are not exactly the roster.
    #[error("givers do not match the roster ({givers} givers, {roster} participants)")]
    GiverMismatch {
        /// Number of givers in the assignment.
        givers: usize,
        /// Number of participants in the roster.
        roster: usize,
    },

    /// The receivers are not exactly the roster.
    #[error("receivers do not match the roster ({receivers} receivers, {roster} participants)")]
    ReceiverMismatch {
        /// Number of receivers in the assignment.
        receivers: usize,
        /// Number of participants in the roster.
        roster: usize,
    },

    /// Somebody gives to themselves.
    #[error("{name} gives to themselves")]
    SelfPairing {
        /// The participant mapped to themselves.
        name: String,
    },
}

/// Errors returned by [`crate::solve_pairing`] and friends.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PairingError {
    /// Invalid roster or constraints.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The constraints cannot be satisfied.
    #[error("infeasible: {0}")]
    Infeasible(#[from] InfeasibleError),
}

impl PairingError {
    /// Returns true if the caller's input is at fault.
    ///
    /// Infeasibility may also stem from the input, but it is only discovered
    /// by trying to solve, so callers report it differently.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}
