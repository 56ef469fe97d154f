use crate::basic_types::ParticipantIndex;
use crate::constraints::AllowedReceivers;
use crate::engine::PartialAssignment;

/// The view of the search state which is available when selecting the next giver.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SelectionContext<'a> {
    /// The givers in the (shuffled) order of the current attempt.
    giver_order: &'a [ParticipantIndex],
    allowed: &'a AllowedReceivers,
    partial: &'a PartialAssignment,
}

impl<'a> SelectionContext<'a> {
    pub(crate) fn new(
        giver_order: &'a [ParticipantIndex],
        allowed: &'a AllowedReceivers,
        partial: &'a PartialAssignment,
    ) -> Self {
        SelectionContext {
            giver_order,
            allowed,
            partial,
        }
    }

    /// The givers which do not have a receiver yet, in the order of the current attempt.
    pub(crate) fn unassigned_givers(&self) -> impl Iterator<Item = ParticipantIndex> + 'a {
        let partial = self.partial;
        self.giver_order
            .iter()
            .copied()
            .filter(move |&giver| !partial.is_assigned(giver))
    }

    /// The number of receivers which `giver` could still be assigned.
    pub(crate) fn num_available_receivers(&self, giver: ParticipantIndex) -> usize {
        self.partial.num_available_receivers(giver, self.allowed)
    }
}
