//! Brute-force oracle.

use santa_core::{Assignment, Roster};

use crate::scenario::Scenario;

/// Every valid assignment for a scenario.
///
/// An assignment is stored as `receivers[giver]` over roster indices. A
/// permutation is valid when it has no fixed point, contains every
/// always-pair, and avoids every never-pair. Rosters under two people have no
/// valid assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelHat {
    solutions: Vec<Vec<usize>>,
}

impl ModelHat {
    /// Enumerate the solutions of `scenario`.
    pub fn new(scenario: &Scenario) -> Self {
        let size = scenario.size();
        let mut solutions = Vec::new();
        if size >= 2 {
            let mut fixed = vec![None; size];
            for &(giver, receiver) in scenario.always() {
                fixed[giver] = Some(receiver);
            }
            let mut forbidden = vec![vec![false; size]; size];
            for (giver, row) in forbidden.iter_mut().enumerate() {
                row[giver] = true;
            }
            for &(giver, receiver) in scenario.never() {
                forbidden[giver][receiver] = true;
            }

            let mut current = Vec::with_capacity(size);
            let mut used = vec![false; size];
            enumerate(&fixed, &forbidden, &mut current, &mut used, &mut solutions);
        }
        Self { solutions }
    }

    /// All valid assignments in lexicographic order.
    pub fn solutions(&self) -> &[Vec<usize>] {
        &self.solutions
    }

    /// Number of valid assignments.
    pub fn count(&self) -> usize {
        self.solutions.len()
    }

    /// True if at least one valid assignment exists.
    pub fn is_solvable(&self) -> bool {
        !self.solutions.is_empty()
    }

    /// True if `receivers` is one of the valid assignments.
    pub fn accepts(&self, receivers: &[usize]) -> bool {
        self.solutions.binary_search_by(|s| s.as_slice().cmp(receivers)).is_ok()
    }
}

fn enumerate(
    fixed: &[Option<usize>],
    forbidden: &[Vec<bool>],
    current: &mut Vec<usize>,
    used: &mut [bool],
    out: &mut Vec<Vec<usize>>,
) {
    let giver = current.len();
    if giver == fixed.len() {
        out.push(current.clone());
        return;
    }

    for receiver in 0..fixed.len() {
        if used[receiver] || forbidden[giver][receiver] {
            continue;
        }
        if fixed[giver].is_some_and(|r| r != receiver) {
            continue;
        }
        used[receiver] = true;
        current.push(receiver);
        enumerate(fixed, forbidden, current, used, out);
        current.pop();
        used[receiver] = false;
    }
}

/// Express an assignment as `receivers[giver]` over roster indices.
///
/// Returns `None` if the assignment does not cover the roster exactly or
/// names someone outside it.
pub fn receivers_by_index(assignment: &Assignment, roster: &Roster) -> Option<Vec<usize>> {
    if assignment.len() != roster.len() {
        return None;
    }
    roster
        .names()
        .iter()
        .map(|giver| assignment.receiver_of(giver).and_then(|receiver| roster.index_of(receiver)))
        .collect()
}
