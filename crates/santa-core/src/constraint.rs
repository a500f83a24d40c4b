//! Always- and never-constraints.
//!
//! Constraints arrive as plain `(giver, receiver)` name pairs. Before the
//! solver touches them they are resolved against a [`Roster`] into index
//! pairs, which is where every configuration error is reported.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{error::ConfigError, roster::Roster};

/// A `(giver, receiver)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Constraint {
    /// Participant giving the gift.
    pub giver: String,
    /// Participant receiving the gift.
    pub receiver: String,
}

impl Constraint {
    /// Create a constraint.
    pub fn new(giver: impl Into<String>, receiver: impl Into<String>) -> Self {
        Self { giver: giver.into(), receiver: receiver.into() }
    }

    /// Parse a raw `[giver, receiver]` list as read from a constraints file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MalformedConstraint` unless the list holds
    /// exactly two names.
    pub fn from_pair<S: AsRef<str>>(pair: &[S]) -> Result<Self, ConfigError> {
        match pair {
            [giver, receiver] => Ok(Self::new(giver.as_ref(), receiver.as_ref())),
            _ => Err(ConfigError::MalformedConstraint { len: pair.len() }),
        }
    }

    /// Parse a list of raw pairs.
    pub fn from_pairs<P, S>(pairs: &[P]) -> Result<Vec<Self>, ConfigError>
    where
        P: AsRef<[S]>,
        S: AsRef<str>,
    {
        pairs.iter().map(|pair| Self::from_pair(pair.as_ref())).collect()
    }

    /// Resolve both names to roster indices.
    fn resolve(&self, roster: &Roster) -> Result<(usize, usize), ConfigError> {
        let giver = roster.require(&self.giver)?;
        let receiver = roster.require(&self.receiver)?;
        if giver == receiver {
            return Err(ConfigError::SelfConstraint { name: self.giver.clone() });
        }
        Ok((giver, receiver))
    }
}

/// Constraints resolved to roster indices and checked for consistency.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ResolvedConstraints {
    /// Required `(giver, receiver)` index pairs. Givers and receivers are
    /// each unique.
    pub(crate) always: Vec<(usize, usize)>,
    /// Forbidden `(giver, receiver)` index pairs.
    pub(crate) never: Vec<(usize, usize)>,
}

impl ResolvedConstraints {
    /// Validate both constraint sets against the roster.
    ///
    /// # Errors
    ///
    /// - `UnknownParticipant` if a name is not on the roster
    /// - `SelfConstraint` if a pair names the same person twice
    /// - `DuplicateGiver` / `DuplicateReceiver` if a participant is bound by
    ///   two always-constraints on the same side
    pub(crate) fn resolve(
        roster: &Roster,
        always: &[Constraint],
        never: &[Constraint],
    ) -> Result<Self, ConfigError> {
        let mut bound_givers = HashSet::new();
        let mut bound_receivers = HashSet::new();
        let mut resolved = Self::default();

        for constraint in always {
            let (giver, receiver) = constraint.resolve(roster)?;
            if !bound_givers.insert(giver) {
                return Err(ConfigError::DuplicateGiver { giver: constraint.giver.clone() });
            }
            if !bound_receivers.insert(receiver) {
                return Err(ConfigError::DuplicateReceiver {
                    receiver: constraint.receiver.clone(),
                });
            }
            resolved.always.push((giver, receiver));
        }

        for constraint in never {
            resolved.never.push(constraint.resolve(roster)?);
        }

        Ok(resolved)
    }

    /// First pair that is both required and forbidden, if any.
    pub(crate) fn contradiction(&self) -> Option<(usize, usize)> {
        self.never.iter().copied().find(|pair| self.always.contains(pair))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Roster {
        Roster::new(["A", "B", "C", "D"]).unwrap()
    }

    #[test]
    fn from_pair_requires_two_names() {
        assert_eq!(Constraint::from_pair(&["A", "B"]), Ok(Constraint::new("A", "B")));
        assert_eq!(
            Constraint::from_pair(&["A"]),
            Err(ConfigError::MalformedConstraint { len: 1 })
        );
        assert_eq!(
            Constraint::from_pair(&["A", "B", "C"]),
            Err(ConfigError::MalformedConstraint { len: 3 })
        );
    }

    #[test]
    fn from_pairs_stops_at_first_malformed() {
        let raw = vec![vec!["A".to_string(), "B".to_string()], vec![]];
        assert_eq!(Constraint::from_pairs(&raw), Err(ConfigError::MalformedConstraint { len: 0 }));
    }

    #[test]
    fn resolves_to_indices() {
        let resolved = ResolvedConstraints::resolve(
            &roster(),
            &[Constraint::new("A", "B")],
            &[Constraint::new("C", "D"), Constraint::new("C", "D")],
        )
        .unwrap();

        assert_eq!(resolved.always, vec![(0, 1)]);
        assert_eq!(resolved.never, vec![(2, 3), (2, 3)]);
        assert_eq!(resolved.contradiction(), None);
    }

    #[test]
    fn unknown_never_giver_is_config_error() {
        let result =
            ResolvedConstraints::resolve(&roster(), &[], &[Constraint::new("Zed", "A")]);
        assert_eq!(result, Err(ConfigError::UnknownParticipant { name: "Zed".to_string() }));
    }

    #[test]
    fn self_constraint_rejected() {
        let result = ResolvedConstraints::resolve(&roster(), &[Constraint::new("A", "A")], &[]);
        assert_eq!(result, Err(ConfigError::SelfConstraint { name: "A".to_string() }));
    }

    #[test]
    fn duplicate_bindings_rejected() {
        let result = ResolvedConstraints::resolve(
            &roster(),
            &[Constraint::new("A", "B"), Constraint::new("A", "C")],
            &[],
        );
        assert_eq!(result, Err(ConfigError::DuplicateGiver { giver: "A".to_string() }));

        let result = ResolvedConstraints::resolve(
            &roster(),
            &[Constraint::new("A", "B"), Constraint::new("C", "B")],
            &[],
        );
        assert_eq!(result, Err(ConfigError::DuplicateReceiver { receiver: "B".to_string() }));
    }

    #[test]
    fn contradiction_detected() {
        let resolved = ResolvedConstraints::resolve(
            &roster(),
            &[Constraint::new("A", "B")],
            &[Constraint::new("A", "B")],
        )
        .unwrap();
        assert_eq!(resolved.contradiction(), Some((0, 1)));
    }
}
