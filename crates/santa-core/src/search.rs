//! Backtracking completion of a partial assignment.
//!
//! Given the pairs already fixed by always-constraints, assign every
//! remaining giver a distinct remaining receiver so nobody gives to
//! themselves. The search is a plain depth-first backtracker over roster
//! indices:
//!
//! - Givers are taken last-in-first-out (from the end of the slice).
//! - Receivers are tried in slice order, skipping the giver themselves and
//!   any receiver already consumed deeper up the stack.
//! - A "consumed" flag per receiver slot is the only mutable search state.
//!   Every flag and tentative pair set on a failing branch is cleared before
//!   returning, so a failed call leaves the caller's state untouched.
//!
//! Never-constraints are not consulted here; the caller validates complete
//! assignments against them.

/// Complete `partial` by assigning each of `givers` one of `receivers`.
///
/// `partial[giver]` receives `Some(receiver)` for every giver in `givers`.
/// Entries for other givers are not read or written.
///
/// Returns `false`, with `partial` unchanged, if no completion exists: the
/// slices differ in length, or the only way out would pair somebody with
/// themselves (e.g. a single giver left facing only their own name).
pub fn complete_assignment(
    partial: &mut [Option<usize>],
    givers: &[usize],
    receivers: &[usize],
) -> bool {
    if givers.len() != receivers.len() {
        return false;
    }

    let mut consumed = vec![false; receivers.len()];
    extend(partial, givers, receivers, &mut consumed)
}

/// Assign the last giver in `givers`, then recurse on the rest.
fn extend(
    partial: &mut [Option<usize>],
    givers: &[usize],
    receivers: &[usize],
    consumed: &mut [bool],
) -> bool {
    // All givers placed; lengths matched on entry, so every receiver is used.
    let Some((&giver, rest)) = givers.split_last() else {
        return true;
    };

    for (slot, &receiver) in receivers.iter().enumerate() {
        if consumed[slot] || receiver == giver {
            continue;
        }

        consumed[slot] = true;
        partial[giver] = Some(receiver);

        if extend(partial, rest, receivers, consumed) {
            return true;
        }

        partial[giver] = None;
        consumed[slot] = false;
    }

    false
}
