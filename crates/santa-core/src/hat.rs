//! Drawing names from the hat.
//!
//! The orchestrator ties the pieces together:
//!
//! 1. Seed a ChaCha RNG from the caller's seed. Nothing else feeds
//!    randomness into the draw, so identical inputs give identical output.
//! 2. Without always-constraints, draw a plain derangement.
//! 3. With always-constraints, fix those pairs, shuffle the free givers and
//!    free receivers independently, and let the backtracking search complete
//!    the assignment.
//! 4. Validate the result against never-constraints; retry with fresh
//!    shuffles up to [`HatConfig::max_attempts`] times.

use rand::{SeedableRng, seq::SliceRandom};
use rand_chacha::ChaCha8Rng;

use crate::{
    assignment::Assignment,
    config::{HatConfig, NeverPolicy},
    constraint::{Constraint, ResolvedConstraints},
    derangement::generate_derangement,
    error::{InfeasibleError, PairingError},
    roster::Roster,
    search::complete_assignment,
    validate::check_never_constraints,
};

/// Constrained pairing solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecretSantaHat {
    config: HatConfig,
}

impl SecretSantaHat {
    /// Create a solver with the given configuration.
    pub fn new(config: HatConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &HatConfig {
        &self.config
    }

    /// Pair every roster member with a receiver.
    ///
    /// The returned assignment is a derangement of `roster` that contains
    /// every always-constraint and, subject to [`NeverPolicy`], none of the
    /// never-constraints.
    ///
    /// # Errors
    ///
    /// - `PairingError::Config` if a constraint is invalid for the roster
    /// - `PairingError::Infeasible` if the roster is too small, the
    ///   constraints contradict each other, or never-constraints could not be
    ///   satisfied within the attempt budget
    pub fn draw(
        &self,
        roster: &Roster,
        seed: u64,
        always: &[Constraint],
        never: &[Constraint],
    ) -> Result<Assignment, PairingError> {
        if roster.len() < 2 {
            return Err(InfeasibleError::RosterTooSmall { size: roster.len() }.into());
        }

        let resolved = ResolvedConstraints::resolve(roster, always, never)?;
        if let Some((giver, receiver)) = resolved.contradiction() {
            return Err(InfeasibleError::Contradiction {
                giver: roster.names()[giver].clone(),
                receiver: roster.names()[receiver].clone(),
            }
            .into());
        }

        tracing::debug!(
            seed,
            participants = roster.len(),
            always = always.len(),
            never = never.len(),
            "drawing pairings"
        );

        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        if resolved.always.is_empty() {
            self.draw_unconstrained(roster, &mut rng, never)
        } else {
            self.draw_constrained(roster, &mut rng, &resolved, never)
        }
    }

    /// Plain derangements, optionally filtered by never-constraints.
    fn draw_unconstrained(
        &self,
        roster: &Roster,
        rng: &mut ChaCha8Rng,
        never: &[Constraint],
    ) -> Result<Assignment, PairingError> {
        let enforce_never =
            !never.is_empty() && self.config.never_policy == NeverPolicy::Everywhere;
        if !never.is_empty() && !enforce_never {
            tracing::warn!(
                never = never.len(),
                "never-constraints ignored without always-constraints"
            );
        }

        let attempts = self.attempts();
        for attempt in 1..=attempts {
            let receivers = generate_derangement(roster.len(), rng, self.config.max_shuffles)?;
            let receivers: Vec<Option<usize>> = receivers.into_iter().map(Some).collect();
            let assignment = Assignment::from_indices(roster, &receivers);

            if !enforce_never || check_never_constraints(&assignment, never)? {
                tracing::debug!(attempt, "pairings accepted");
                return Ok(assignment);
            }
            tracing::warn!(attempt, attempts, "derangement violates a never-constraint, retrying");
        }

        Err(InfeasibleError::RetriesExhausted { attempts }.into())
    }

    /// Fixed always-pairs completed by backtracking search.
    fn draw_constrained(
        &self,
        roster: &Roster,
        rng: &mut ChaCha8Rng,
        resolved: &ResolvedConstraints,
        never: &[Constraint],
    ) -> Result<Assignment, PairingError> {
        let mut base = vec![None; roster.len()];
        let mut bound_receiver = vec![false; roster.len()];
        for &(giver, receiver) in &resolved.always {
            base[giver] = Some(receiver);
            bound_receiver[receiver] = true;
        }

        let free_givers: Vec<usize> = (0..roster.len()).filter(|&g| base[g].is_none()).collect();
        let free_receivers: Vec<usize> =
            (0..roster.len()).filter(|&r| !bound_receiver[r]).collect();

        // With two or more free participants a completion always exists; with
        // exactly one it exists unless that person is left to themselves.
        if let ([giver], [receiver]) = (free_givers.as_slice(), free_receivers.as_slice()) {
            if giver == receiver {
                return Err(InfeasibleError::ForcedSelfPairing {
                    name: roster.names()[*giver].clone(),
                }
                .into());
            }
        }

        let attempts = self.attempts();
        for attempt in 1..=attempts {
            let mut partial = base.clone();
            let mut givers = free_givers.clone();
            let mut receivers = free_receivers.clone();
            givers.shuffle(rng);
            receivers.shuffle(rng);

            let completed = complete_assignment(&mut partial, &givers, &receivers);
            if !completed {
                tracing::error!(
                    attempt,
                    free = givers.len(),
                    "backtracking failed on a solvable sub-problem"
                );
            }
            assert!(completed, "invariant: free givers and receivers always admit a completion");

            let assignment = Assignment::from_indices(roster, &partial);
            debug_assert_eq!(assignment.len(), roster.len());

            if never.is_empty() || check_never_constraints(&assignment, never)? {
                tracing::debug!(attempt, "pairings accepted");
                return Ok(assignment);
            }
            tracing::warn!(attempt, attempts, "assignment violates a never-constraint, retrying");
        }

        Err(InfeasibleError::RetriesExhausted { attempts }.into())
    }

    fn attempts(&self) -> u32 {
        self.config.max_attempts.max(1)
    }
}

/// Draw pairings with the default configuration.
///
/// `None` and an empty slice are equivalent for both constraint sets.
pub fn secret_santa_hat(
    roster: &Roster,
    seed: u64,
    always: Option<&[Constraint]>,
    never: Option<&[Constraint]>,
) -> Result<Assignment, PairingError> {
    SecretSantaHat::default().draw(roster, seed, always.unwrap_or_default(), never.unwrap_or_default())
}

/// Solve a pairing from plain names and raw `[giver, receiver]` lists.
///
/// This is the entry point for collaborators that hold nothing but strings
/// (file loaders, front ends).
///
/// # Errors
///
/// - `ConfigError` for duplicate names, malformed pairs, unknown names,
///   self-constraints, or duplicate always-bindings
/// - `InfeasibleError` for a roster under two people or unsatisfiable
///   constraints
pub fn solve_pairing<S: AsRef<str>>(
    names: &[S],
    seed: u64,
    always: Option<&[Vec<String>]>,
    never: Option<&[Vec<String>]>,
) -> Result<Assignment, PairingError> {
    let roster = Roster::new(names.iter().map(|name| name.as_ref().to_string()))?;
    let always = Constraint::from_pairs(always.unwrap_or_default())?;
    let never = Constraint::from_pairs(never.unwrap_or_default())?;
    secret_santa_hat(&roster, seed, Some(always.as_slice()), Some(never.as_slice()))
}
