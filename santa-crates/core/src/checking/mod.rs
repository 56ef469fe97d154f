//! Independent verification of assignments.
//!
//! [`verify_assignment`] does not share any code with the search; it only looks at the pairs of
//! an [`Assignment`] and the constraints of the draw. The engine uses it to double-check its own
//! results when the moderate assertion level is enabled, and the solver binary uses it for its
//! `--check` flag.
use thiserror::Error;

use crate::basic_types::Participant;
use crate::constraints::ExclusionSet;
use crate::constraints::NoRepeatMap;
use crate::containers::HashSet;
use crate::results::Assignment;

/// A violated property of an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VerificationError<P> {
    #[error("participant {0} does not give a gift")]
    MissingGiver(P),

    #[error("participant {0} is not part of the draw")]
    UnknownParticipant(P),

    #[error("participant {0} gives more than one gift")]
    DuplicateGiver(P),

    #[error("participant {0} receives more than one gift")]
    DuplicateReceiver(P),

    #[error("participant {0} gives a gift to themselves")]
    SelfAssignment(P),

    #[error("{giver} is not allowed to give a gift to {receiver}")]
    ExcludedPair { giver: P, receiver: P },

    #[error("{giver} already gave a gift to {receiver} in the previous round")]
    RepeatedPair { giver: P, receiver: P },
}

/// Checks that `assignment` is a valid outcome of a draw over `participants` with the provided
/// constraints.
///
/// The pairs are checked in order, and the first violation is returned. Participants which do not
/// give a gift are reported after all pairs have been checked.
pub fn verify_assignment<P: Participant>(
    participants: &[P],
    exclusions: &ExclusionSet<P>,
    no_repeat: &NoRepeatMap<P>,
    assignment: &Assignment<P>,
) -> Result<(), VerificationError<P>> {
    let known = participants.iter().copied().collect::<HashSet<_>>();
    let mut givers: HashSet<P> = HashSet::default();
    let mut receivers: HashSet<P> = HashSet::default();

    for (giver, receiver) in assignment.iter() {
        if !known.contains(&giver) {
            return Err(VerificationError::UnknownParticipant(giver));
        }
        if !known.contains(&receiver) {
            return Err(VerificationError::UnknownParticipant(receiver));
        }
        if !givers.insert(giver) {
            return Err(VerificationError::DuplicateGiver(giver));
        }
        if !receivers.insert(receiver) {
            return Err(VerificationError::DuplicateReceiver(receiver));
        }
        if giver == receiver {
            return Err(VerificationError::SelfAssignment(giver));
        }
        if exclusions.contains(giver, receiver) {
            return Err(VerificationError::ExcludedPair { giver, receiver });
        }
        if no_repeat.is_repeat(giver, receiver) {
            return Err(VerificationError::RepeatedPair { giver, receiver });
        }
    }

    // Every giver is known and occurs once, so a missing receiver implies a missing giver
    if let Some(&missing) = participants
        .iter()
        .find(|participant| !givers.contains(*participant))
    {
        return Err(VerificationError::MissingGiver(missing));
    }

    Ok(())
}
