//! Unconstrained random derangements.
//!
//! Shuffle-and-reject: shuffle a copy of the roster order until no position
//! keeps its original occupant. About `1/e` of permutations are
//! derangements, so roughly `e` shuffles are needed on average.

use rand::{Rng, seq::SliceRandom};

use crate::error::InfeasibleError;

/// True if `shuffled` has the same length as `original` and differs from it
/// at every position.
pub fn is_derangement<T: PartialEq>(original: &[T], shuffled: &[T]) -> bool {
    original.len() == shuffled.len() && original.iter().zip(shuffled).all(|(a, b)| a != b)
}

/// Generate a derangement of the roster indices `0..len`.
///
/// `result[giver]` is the receiver index for `giver`.
///
/// # Errors
///
/// - `RosterTooSmall` if `len < 2` (no derangement exists)
/// - `ShuffleLimit` if `max_shuffles` shuffles all kept a fixed point
pub fn generate_derangement<R>(
    len: usize,
    rng: &mut R,
    max_shuffles: u32,
) -> Result<Vec<usize>, InfeasibleError>
where
    R: Rng + ?Sized,
{
    if len < 2 {
        return Err(InfeasibleError::RosterTooSmall { size: len });
    }

    let identity: Vec<usize> = (0..len).collect();
    let mut candidate = identity.clone();

    for shuffles in 1..=max_shuffles {
        candidate.shuffle(rng);
        if is_derangement(&identity, &candidate) {
            tracing::trace!(shuffles, len, "derangement found");
            return Ok(candidate);
        }
    }

    Err(InfeasibleError::ShuffleLimit { shuffles: max_shuffles })
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn is_derangement_checks_every_position() {
        assert!(is_derangement(&[1, 2, 3], &[2, 3, 1]));
        assert!(!is_derangement(&[1, 2, 3], &[2, 1, 3]));
        assert!(!is_derangement(&[1, 2, 3], &[2, 3]));
        assert!(is_derangement::<u8>(&[], &[]));
    }

    #[test]
    fn rejects_tiny_rosters() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(
            generate_derangement(0, &mut rng, 100),
            Err(InfeasibleError::RosterTooSmall { size: 0 })
        );
        assert_eq!(
            generate_derangement(1, &mut rng, 100),
            Err(InfeasibleError::RosterTooSmall { size: 1 })
        );
    }

    #[test]
    fn two_people_swap() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(generate_derangement(2, &mut rng, 10_000).unwrap(), vec![1, 0]);
    }

    #[test]
    fn result_is_a_fixed_point_free_permutation() {
        for seed in 0..200 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let result = generate_derangement(50, &mut rng, 10_000).unwrap();

            let mut sorted = result.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, (0..50).collect::<Vec<_>>());
            assert!(result.iter().enumerate().all(|(giver, &receiver)| giver != receiver));
        }
    }

    #[test]
    fn zero_shuffle_cap_fails_fast() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert_eq!(
            generate_derangement(5, &mut rng, 0),
            Err(InfeasibleError::ShuffleLimit { shuffles: 0 })
        );
    }
}
