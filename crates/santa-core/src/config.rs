//! Solver configuration.

/// Where never-constraints are enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NeverPolicy {
    /// Enforce never-constraints whether or not always-constraints exist.
    #[default]
    Everywhere,

    /// Only enforce never-constraints when always-constraints are present.
    ///
    /// Without always-constraints the first derangement drawn is returned
    /// as is. This mirrors how earlier versions of the tool behaved.
    WithAlwaysOnly,
}

/// Solver limits and policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HatConfig {
    /// Attempts before giving up on never-constraints. Values below 1 are
    /// treated as 1.
    pub max_attempts: u32,
    /// Shuffles the derangement generator may try per attempt.
    pub max_shuffles: u32,
    /// Where never-constraints apply.
    pub never_policy: NeverPolicy,
}

impl HatConfig {
    /// Default number of attempts against never-constraints.
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

    /// Default shuffle cap for the derangement generator.
    pub const DEFAULT_MAX_SHUFFLES: u32 = 10_000;
}

impl Default for HatConfig {
    fn default() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            max_shuffles: Self::DEFAULT_MAX_SHUFFLES,
            never_policy: NeverPolicy::default(),
        }
    }
}
