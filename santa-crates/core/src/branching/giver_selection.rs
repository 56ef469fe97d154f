use super::tie_breaking::InOrderTieBreaker;
use super::tie_breaking::TieBreaker;
use super::SelectionContext;
use crate::basic_types::ParticipantIndex;

/// Selects the giver which is assigned next during the search.
pub(crate) trait GiverSelector {
    /// Returns the next giver to assign, or [`None`] if all givers have been assigned.
    fn select_giver(&mut self, context: &SelectionContext<'_>) -> Option<ParticipantIndex>;
}

/// A [`GiverSelector`] which selects the unassigned giver with the fewest available receivers
/// (first-fail).
///
/// Ties are broken by the order of the current attempt, the first giver with the fewest receivers
/// is selected. A giver without any available receivers is always selected first, which causes the
/// search to backtrack immediately.
#[derive(Debug, Default)]
pub(crate) struct MostConstrainedGiver {
    tie_breaker: InOrderTieBreaker<ParticipantIndex, usize>,
}

impl GiverSelector for MostConstrainedGiver {
    fn select_giver(&mut self, context: &SelectionContext<'_>) -> Option<ParticipantIndex> {
        for giver in context.unassigned_givers() {
            let num_available = context.num_available_receivers(giver);
            self.tie_breaker.consider(giver, num_available);

            if num_available == 0 {
                break;
            }
        }

        self.tie_breaker.select()
    }
}

/// A [`GiverSelector`] which selects the first unassigned giver in the order of the attempt.
#[cfg(test)]
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct InputOrderGiver;

#[cfg(test)]
impl GiverSelector for InputOrderGiver {
    fn select_giver(&mut self, context: &SelectionContext<'_>) -> Option<ParticipantIndex> {
        context.unassigned_givers().next()
    }
}
