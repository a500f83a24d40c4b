//! Fuzz target for [`SecretSantaHat::draw`] against the brute-force model
//!
//! # Strategy
//!
//! - Small rosters: up to seven people so the model can enumerate every
//!   permutation
//! - Arbitrary always/never pairs, normalized into valid configuration
//! - Both never-constraint policies and tiny attempt budgets
//!
//! # Invariants
//!
//! - Every returned assignment is a derangement of the roster
//! - Every always-pair is present
//! - Under `Everywhere`, no never-pair is present
//! - A scenario with no valid assignment is NEVER answered with one
//! - Normalized scenarios NEVER produce a configuration error
//! - NEVER panic

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use santa_core::{HatConfig, NeverPolicy, PairingError, SecretSantaHat, sanity_check};
use santa_harness::{ModelHat, Scenario, ScenarioInput, receivers_by_index};

#[derive(Debug, Clone, Arbitrary)]
struct FuzzInput {
    scenario: ScenarioInput,
    max_attempts: u8,
    legacy_never_policy: bool,
}

fuzz_target!(|input: FuzzInput| {
    let scenario = Scenario::from_input(&input.scenario);
    let Ok(roster) = scenario.roster() else {
        panic!("scenario roster has duplicate names: {scenario:?}");
    };

    let never_policy =
        if input.legacy_never_policy { NeverPolicy::WithAlwaysOnly } else { NeverPolicy::Everywhere };
    let hat = SecretSantaHat::new(HatConfig {
        max_attempts: u32::from(input.max_attempts % 16),
        never_policy,
        ..HatConfig::default()
    });

    let result = hat.draw(
        &roster,
        input.scenario.seed,
        &scenario.always_constraints(),
        &scenario.never_constraints(),
    );

    match result {
        Ok(assignment) => {
            assert!(sanity_check(&assignment, &roster).is_ok(), "{assignment:?}");

            let Some(receivers) = receivers_by_index(&assignment, &roster) else {
                panic!("assignment does not cover roster: {assignment:?}");
            };
            for &(giver, receiver) in scenario.always() {
                assert_eq!(receivers[giver], receiver, "always-pair dropped: {scenario:?}");
            }

            let enforced = never_policy == NeverPolicy::Everywhere || !scenario.always().is_empty();
            if enforced {
                assert!(
                    ModelHat::new(&scenario).accepts(&receivers),
                    "{receivers:?} invalid for {scenario:?}"
                );
            }
        },
        Err(PairingError::Config(e)) => {
            panic!("normalized scenario rejected: {e} ({scenario:?})");
        },
        Err(PairingError::Infeasible(_)) => {},
    }
});
