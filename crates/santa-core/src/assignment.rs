//! The solver's output.

use std::collections::{BTreeMap, btree_map};

use serde::{Deserialize, Serialize};

use crate::roster::Roster;

/// Giver to receiver mapping.
///
/// Backed by a `BTreeMap` so iteration and serialization order only depend
/// on the names, never on hashing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Assignment {
    pairs: BTreeMap<String, String>,
}

impl Assignment {
    /// Create an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a receiver index per giver index.
    ///
    /// Unassigned givers (`None`) are left out.
    pub(crate) fn from_indices(roster: &Roster, receivers: &[Option<usize>]) -> Self {
        receivers
            .iter()
            .enumerate()
            .filter_map(|(giver, receiver)| {
                let giver = roster.name(giver)?;
                let receiver = roster.name((*receiver)?)?;
                Some((giver.to_string(), receiver.to_string()))
            })
            .collect()
    }

    /// Receiver for a giver.
    pub fn receiver_of(&self, giver: &str) -> Option<&str> {
        self.pairs.get(giver).map(String::as_str)
    }

    /// Record a pairing, returning the previous receiver if any.
    pub fn insert(&mut self, giver: impl Into<String>, receiver: impl Into<String>) -> Option<String> {
        self.pairs.insert(giver.into(), receiver.into())
    }

    /// Number of givers.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// True if nobody has been assigned.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// `(giver, receiver)` pairs ordered by giver.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(g, r)| (g.as_str(), r.as_str()))
    }

    /// Givers in name order.
    pub fn givers(&self) -> impl Iterator<Item = &str> {
        self.pairs.keys().map(String::as_str)
    }

    /// Receivers, ordered by their giver.
    pub fn receivers(&self) -> impl Iterator<Item = &str> {
        self.pairs.values().map(String::as_str)
    }

    /// Consume into the underlying map.
    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.pairs
    }
}

impl FromIterator<(String, String)> for Assignment {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self { pairs: iter.into_iter().collect() }
    }
}

impl IntoIterator for Assignment {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

impl From<BTreeMap<String, String>> for Assignment {
    fn from(pairs: BTreeMap<String, String>) -> Self {
        Self { pairs }
    }
}
