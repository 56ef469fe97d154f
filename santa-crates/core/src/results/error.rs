use thiserror::Error;

/// The reasons for which a draw can fail to produce an [`Assignment`].
///
/// [`Assignment`]: crate::results::Assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AssignmentError<P> {
    /// A draw needs at least two participants.
    #[error("a draw needs at least 2 participants, but {count} were provided")]
    TooFewParticipants { count: usize },

    #[error("participant {0} occurs more than once")]
    DuplicateParticipant(P),

    /// The constraints leave `giver` without a single allowed receiver.
    #[error("participant {giver} has no allowed receiver")]
    InfeasibleConstraints { giver: P },

    /// Every attempt ended without a complete assignment. This either means that the constraints
    /// are infeasible as a whole, or that the attempt bound is too low (a bound of zero attempts
    /// always ends here).
    #[error("no assignment was found in {attempts} attempt(s)")]
    AssignmentExhausted { attempts: usize },
}

#[cfg(test)]
mod tests {
    use super::AssignmentError;

    #[test]
    fn messages_name_the_participant() {
        let error = AssignmentError::InfeasibleConstraints { giver: "ann" };
        assert_eq!(error.to_string(), "participant ann has no allowed receiver");

        let error = AssignmentError::<u32>::AssignmentExhausted { attempts: 3 };
        assert_eq!(error.to_string(), "no assignment was found in 3 attempt(s)");

        let error = AssignmentError::<u32>::AssignmentExhausted { attempts: 0 };
        assert_eq!(error.to_string(), "no assignment was found in 0 attempt(s)");
    }
}
