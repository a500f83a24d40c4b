//! Fuzz target for [`solve_pairing`] on unvalidated strings
//!
//! # Strategy
//!
//! - Arbitrary names, including duplicates and empty strings
//! - Constraint lists of any length, naming anyone or no one
//!
//! # Invariants
//!
//! - Invalid input surfaces as an error, NEVER a panic
//! - On success the assignment is a derangement of the names
//! - On success every always-pair is present and no never-pair is

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use santa_core::{Constraint, Roster, check_never_constraints, sanity_check, solve_pairing};

#[derive(Debug, Clone, Arbitrary)]
struct FuzzInput {
    names: Vec<String>,
    seed: u64,
    always: Option<Vec<Vec<String>>>,
    never: Option<Vec<Vec<String>>>,
}

fuzz_target!(|input: FuzzInput| {
    let Ok(assignment) =
        solve_pairing(&input.names, input.seed, input.always.as_deref(), input.never.as_deref())
    else {
        return;
    };

    let Ok(roster) = Roster::new(input.names.iter().cloned()) else {
        panic!("solved a roster with duplicate names");
    };
    assert!(sanity_check(&assignment, &roster).is_ok(), "{assignment:?}");

    for pair in input.always.iter().flatten() {
        let Ok(constraint) = Constraint::from_pair(pair) else {
            panic!("solved with malformed always-pair {pair:?}");
        };
        assert_eq!(assignment.receiver_of(&constraint.giver), Some(constraint.receiver.as_str()));
    }

    if let Some(never) = &input.never {
        let Ok(never) = Constraint::from_pairs(never) else {
            panic!("solved with malformed never-pairs");
        };
        assert_eq!(check_never_constraints(&assignment, &never), Ok(true));
    }
});
