//! Checks on finished assignments.

use crate::{
    assignment::Assignment,
    constraint::Constraint,
    error::{ConfigError, SanityError},
    roster::Roster,
};

/// True iff no never-constraint's giver is paired with its forbidden
/// receiver.
///
/// Every constraint is inspected, so an unknown giver is reported even when
/// an earlier constraint is already violated.
///
/// # Errors
///
/// Returns `ConfigError::UnknownParticipant` if a constraint's giver is not
/// in the assignment.
pub fn check_never_constraints(
    assignment: &Assignment,
    never: &[Constraint],
) -> Result<bool, ConfigError> {
    let mut satisfied = true;
    for constraint in never {
        let receiver = assignment.receiver_of(&constraint.giver).ok_or_else(|| {
            ConfigError::UnknownParticipant { name: constraint.giver.clone() }
        })?;
        if receiver == constraint.receiver {
            satisfied = false;
        }
    }
    Ok(satisfied)
}

/// Re-verify that `assignment` is a derangement of `roster`.
///
/// Givers and receivers, each sorted, must equal the sorted roster, and
/// nobody may give to themselves.
pub fn sanity_check(assignment: &Assignment, roster: &Roster) -> Result<(), SanityError> {
    let mut expected: Vec<&str> = roster.names().iter().map(String::as_str).collect();
    expected.sort_unstable();

    let mut givers: Vec<&str> = assignment.givers().collect();
    givers.sort_unstable();
    if givers != expected {
        return Err(SanityError::GiverMismatch { givers: givers.len(), roster: roster.len() });
    }

    let mut receivers: Vec<&str> = assignment.receivers().collect();
    receivers.sort_unstable();
    if receivers != expected {
        return Err(SanityError::ReceiverMismatch {
            receivers: receivers.len(),
            roster: roster.len(),
        });
    }

    if let Some((giver, _)) = assignment.iter().find(|(giver, receiver)| giver == receiver) {
        return Err(SanityError::SelfPairing { name: giver.to_string() });
    }

    Ok(())
}
