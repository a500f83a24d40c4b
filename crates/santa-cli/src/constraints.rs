//! Constraint files.
//!
//! ```json
//! {
//!     "constraints": {
//!         "always": [["Light Yagami", "Misa Amane"]],
//!         "never": [["Misa Amane", "Light Yagami"]]
//!     }
//! }
//! ```
//!
//! Both categories are optional. Pairs are read as plain string lists so
//! that a pair of the wrong length surfaces as a solver configuration error.

use std::{fs, path::Path};

use santa_core::Constraint;
use serde::Deserialize;

use crate::error::CliError;

/// Always- and never-constraints read from a file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    /// Pairs that must appear.
    pub always: Vec<Constraint>,
    /// Pairs that must not appear.
    pub never: Vec<Constraint>,
}

impl ConstraintSet {
    /// True if there are no constraints of either kind.
    pub fn is_empty(&self) -> bool {
        self.always.is_empty() && self.never.is_empty()
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConstraintsFile {
    #[serde(default)]
    constraints: RawConstraints,
}

#[derive(Debug, Default, Deserialize)]
struct RawConstraints {
    #[serde(default)]
    always: Vec<Vec<String>>,
    #[serde(default)]
    never: Vec<Vec<String>>,
}

/// Read a constraints file.
pub fn read_constraints(path: &Path) -> Result<ConstraintSet, CliError> {
    let contents = fs::read_to_string(path)
        .map_err(|source| CliError::Read { path: path.to_path_buf(), source })?;
    parse_constraints(&contents, path)
}

/// Parse constraints from JSON text. `path` is only used in errors.
pub fn parse_constraints(contents: &str, path: &Path) -> Result<ConstraintSet, CliError> {
    let file: ConstraintsFile = serde_json::from_str(contents)
        .map_err(|source| CliError::Json { path: path.to_path_buf(), source })?;

    Ok(ConstraintSet {
        always: Constraint::from_pairs(&file.constraints.always)?,
        never: Constraint::from_pairs(&file.constraints.never)?,
    })
}
