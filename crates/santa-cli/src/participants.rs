//! Participant files.
//!
//! ```json
//! {
//!     "names": {
//!         "Light Yagami": { "email": "kira@example.com" },
//!         "Misa Amane": { "text": "+15555550123", "checked": true }
//!     }
//! }
//! ```
//!
//! The participant's name is the object key and the roster follows the
//! file's key order. Each entry needs at least one contact method. The
//! legacy `checked` flag is read as `is_verified`.

use std::{fs, path::Path};

use santa_core::Roster;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::CliError;

/// One person taking part in the exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    /// Unique name.
    pub name: String,
    /// Email address.
    pub email: Option<String>,
    /// Phone number for text messages.
    pub text: Option<String>,
    /// Whether the contact details were confirmed.
    pub is_verified: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct ParticipantsFile {
    names: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct ParticipantEntry {
    email: Option<String>,
    text: Option<String>,
    is_verified: Option<bool>,
    checked: Option<bool>,
}

/// Read and validate a participants file.
pub fn read_participants(path: &Path) -> Result<Vec<Participant>, CliError> {
    let contents = fs::read_to_string(path)
        .map_err(|source| CliError::Read { path: path.to_path_buf(), source })?;
    parse_participants(&contents, path)
}

/// Parse participants from JSON text. `path` is only used in errors.
pub fn parse_participants(contents: &str, path: &Path) -> Result<Vec<Participant>, CliError> {
    let file: ParticipantsFile = serde_json::from_str(contents)
        .map_err(|source| CliError::Json { path: path.to_path_buf(), source })?;

    file.names.into_iter().map(|(name, entry)| participant(name, entry, path)).collect()
}

fn participant(name: String, entry: Value, path: &Path) -> Result<Participant, CliError> {
    let Value::Object(fields) = entry else {
        return Err(CliError::Participant { name, reason: "entry must be an object".to_string() });
    };
    if fields.contains_key("name") {
        return Err(CliError::Participant {
            name,
            reason: "name must be stored as the key, not a field".to_string(),
        });
    }

    let entry: ParticipantEntry = serde_json::from_value(Value::Object(fields))
        .map_err(|source| CliError::Json { path: path.to_path_buf(), source })?;

    if entry.email.is_none() && entry.text.is_none() {
        return Err(CliError::Participant {
            name,
            reason: "needs at least one contact method: email or text".to_string(),
        });
    }

    Ok(Participant {
        name,
        email: entry.email,
        text: entry.text,
        is_verified: entry.is_verified.or(entry.checked),
    })
}

/// Build the solver roster, in file order.
pub fn roster(participants: &[Participant]) -> Result<Roster, CliError> {
    Ok(Roster::new(participants.iter().map(|p| p.name.clone()))?)
}
