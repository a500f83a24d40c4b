//! Exchange participants.
//!
//! A [`Roster`] is the ordered list of everybody taking part. Order matters:
//! the solver works on roster indices, so the same names in a different order
//! produce a different (but equally valid) assignment for a given seed.

use std::collections::HashMap;

use crate::error::ConfigError;

/// Ordered set of unique participant names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    /// Names in roster order.
    names: Vec<String>,
    /// Name to roster index.
    index: HashMap<String, usize>,
}

impl Roster {
    /// Build a roster, rejecting duplicate names.
    ///
    /// An empty or single-person roster is accepted here; it is the solver
    /// that refuses to pair fewer than two people.
    pub fn new<I, S>(names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut roster = Self { names: Vec::new(), index: HashMap::new() };
        for name in names {
            let name = name.into();
            if roster.index.contains_key(&name) {
                return Err(ConfigError::DuplicateParticipant { name });
            }
            roster.index.insert(name.clone(), roster.names.len());
            roster.names.push(name);
        }
        Ok(roster)
    }

    /// Number of participants.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True if nobody is taking part.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in roster order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Name at a roster index.
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Check if a name is on the roster.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Roster index of a name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Roster index of a name, or `UnknownParticipant`.
    pub(crate) fn require(&self, name: &str) -> Result<usize, ConfigError> {
        self.index_of(name).ok_or_else(|| ConfigError::UnknownParticipant { name: name.to_string() })
    }
}
