//! Pairing scenarios over small rosters.
//!
//! A [`Scenario`] is a roster size plus always- and never-pairs over roster
//! indices. Construction normalizes arbitrary input into something the
//! solver accepts as configuration: indices wrap into the roster, self-pairs
//! are dropped, and an always-pair that reuses a bound giver or receiver is
//! skipped. Whether the scenario is *solvable* is left open; that is what
//! the model decides.

use arbitrary::Arbitrary;
use rand::Rng;
use santa_core::{ConfigError, Constraint, Roster};

/// Largest roster a scenario may have. The model enumerates `n!`
/// permutations, so this stays small.
pub const MAX_PARTICIPANTS: usize = 7;

/// Raw scenario as produced by a fuzzer.
#[derive(Debug, Clone, Arbitrary)]
pub struct ScenarioInput {
    /// Roster size, reduced modulo `MAX_PARTICIPANTS + 1`.
    pub size: u8,
    /// Solver seed.
    pub seed: u64,
    /// Candidate always-pairs.
    pub always: Vec<(u8, u8)>,
    /// Candidate never-pairs.
    pub never: Vec<(u8, u8)>,
}

/// Normalized scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    size: usize,
    always: Vec<(usize, usize)>,
    never: Vec<(usize, usize)>,
}

impl Scenario {
    /// Build a scenario, normalizing the pairs as described in the module docs.
    ///
    /// `size` is capped at [`MAX_PARTICIPANTS`].
    pub fn new(size: usize, always: &[(usize, usize)], never: &[(usize, usize)]) -> Self {
        let size = size.min(MAX_PARTICIPANTS);
        if size == 0 {
            return Self { size, always: Vec::new(), never: Vec::new() };
        }

        let mut giver_bound = vec![false; size];
        let mut receiver_bound = vec![false; size];
        let mut kept_always = Vec::new();
        for &(giver, receiver) in always {
            let (giver, receiver) = (giver % size, receiver % size);
            if giver == receiver || giver_bound[giver] || receiver_bound[receiver] {
                continue;
            }
            giver_bound[giver] = true;
            receiver_bound[receiver] = true;
            kept_always.push((giver, receiver));
        }

        let kept_never = never
            .iter()
            .map(|&(giver, receiver)| (giver % size, receiver % size))
            .filter(|(giver, receiver)| giver != receiver)
            .collect();

        Self { size, always: kept_always, never: kept_never }
    }

    /// Normalize fuzzer input.
    pub fn from_input(input: &ScenarioInput) -> Self {
        let widen = |pairs: &[(u8, u8)]| -> Vec<(usize, usize)> {
            pairs.iter().map(|&(g, r)| (usize::from(g), usize::from(r))).collect()
        };
        Self::new(
            usize::from(input.size) % (MAX_PARTICIPANTS + 1),
            &widen(&input.always),
            &widen(&input.never),
        )
    }

    /// Draw a random scenario with between 2 and [`MAX_PARTICIPANTS`] people.
    ///
    /// Keeps constraint counts low enough that most scenarios stay solvable.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let size = rng.gen_range(2..=MAX_PARTICIPANTS);
        let mut pairs = |max: usize| -> Vec<(usize, usize)> {
            let count = rng.gen_range(0..=max);
            (0..count).map(|_| (rng.gen_range(0..size), rng.gen_range(0..size))).collect()
        };
        let always = pairs(size / 2);
        let never = pairs(size);
        Self::new(size, &always, &never)
    }

    /// Roster size.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Always-pairs as `(giver, receiver)` indices.
    pub fn always(&self) -> &[(usize, usize)] {
        &self.always
    }

    /// Never-pairs as `(giver, receiver)` indices.
    pub fn never(&self) -> &[(usize, usize)] {
        &self.never
    }

    /// Name of the participant at `index`.
    pub fn name(index: usize) -> String {
        format!("P{index}")
    }

    /// Roster of `P0..Pn`.
    pub fn roster(&self) -> Result<Roster, ConfigError> {
        Roster::new((0..self.size).map(Self::name))
    }

    /// Always-pairs as named constraints.
    pub fn always_constraints(&self) -> Vec<Constraint> {
        named(&self.always)
    }

    /// Never-pairs as named constraints.
    pub fn never_constraints(&self) -> Vec<Constraint> {
        named(&self.never)
    }
}

fn named(pairs: &[(usize, usize)]) -> Vec<Constraint> {
    pairs.iter().map(|&(g, r)| Constraint::new(Scenario::name(g), Scenario::name(r))).collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn drops_self_pairs_and_rebinding() {
        let scenario = Scenario::new(4, &[(0, 1), (0, 2), (3, 1), (2, 2), (5, 3)], &[(1, 1), (6, 0)]);
        assert_eq!(scenario.always(), &[(0, 1), (1, 3)]);
        assert_eq!(scenario.never(), &[(2, 0)]);
    }

    #[test]
    fn size_is_capped() {
        let scenario = Scenario::new(100, &[], &[]);
        assert_eq!(scenario.size(), MAX_PARTICIPANTS);
    }

    #[test]
    fn empty_roster_has_no_pairs() {
        let scenario = Scenario::new(0, &[(0, 1)], &[(1, 0)]);
        assert_eq!(scenario.size(), 0);
        assert!(scenario.always().is_empty());
        assert!(scenario.never().is_empty());
    }

    #[test]
    fn named_constraints() {
        let scenario = Scenario::new(3, &[(0, 2)], &[(1, 0)]);
        assert_eq!(scenario.always_constraints(), vec![Constraint::new("P0", "P2")]);
        assert_eq!(scenario.never_constraints(), vec![Constraint::new("P1", "P0")]);
        assert_eq!(scenario.roster().unwrap().names(), &["P0", "P1", "P2"]);
    }

    #[test]
    fn random_is_deterministic() {
        let a = Scenario::random(&mut ChaCha8Rng::seed_from_u64(9));
        let b = Scenario::random(&mut ChaCha8Rng::seed_from_u64(9));
        assert_eq!(a, b);
        assert!((2..=MAX_PARTICIPANTS).contains(&a.size()));
    }
}
