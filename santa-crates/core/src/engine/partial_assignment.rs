use crate::basic_types::ParticipantIndex;
use crate::constraints::AllowedReceivers;
use crate::containers::KeyedVec;
use crate::santa_assert_simple;

/// The state of a single attempt: which givers have been assigned a receiver, and which receivers
/// have been claimed.
#[derive(Debug, Clone)]
pub(crate) struct PartialAssignment {
    receiver_of: KeyedVec<ParticipantIndex, Option<ParticipantIndex>>,
    is_claimed: KeyedVec<ParticipantIndex, bool>,
    num_assigned: usize,
}

impl PartialAssignment {
    pub(crate) fn new(num_participants: usize) -> Self {
        PartialAssignment {
            receiver_of: KeyedVec::filled(num_participants, None),
            is_claimed: KeyedVec::filled(num_participants, false),
            num_assigned: 0,
        }
    }

    /// Removes all assignments, keeping the allocated storage.
    pub(crate) fn clear(&mut self) {
        self.receiver_of.fill(None);
        self.is_claimed.fill(false);
        self.num_assigned = 0;
    }

    pub(crate) fn num_assigned(&self) -> usize {
        self.num_assigned
    }

    pub(crate) fn is_complete(&self) -> bool {
        self.num_assigned == self.receiver_of.len()
    }

    pub(crate) fn is_assigned(&self, giver: ParticipantIndex) -> bool {
        self.receiver_of[giver].is_some()
    }

    pub(crate) fn is_claimed(&self, receiver: ParticipantIndex) -> bool {
        self.is_claimed[receiver]
    }

    #[cfg(test)]
    pub(crate) fn receiver_of(&self, giver: ParticipantIndex) -> Option<ParticipantIndex> {
        self.receiver_of[giver]
    }

    /// The receivers which `giver` is allowed to draw and which are not yet claimed, in
    /// participant order.
    pub(crate) fn available_receivers<'a>(
        &'a self,
        giver: ParticipantIndex,
        allowed: &'a AllowedReceivers,
    ) -> impl Iterator<Item = ParticipantIndex> + 'a {
        allowed
            .receivers_of(giver)
            .iter()
            .copied()
            .filter(|&receiver| !self.is_claimed(receiver))
    }

    pub(crate) fn num_available_receivers(
        &self,
        giver: ParticipantIndex,
        allowed: &AllowedReceivers,
    ) -> usize {
        self.available_receivers(giver, allowed).count()
    }

    pub(crate) fn assign(&mut self, giver: ParticipantIndex, receiver: ParticipantIndex) {
        santa_assert_simple!(!self.is_assigned(giver), "{giver} is already assigned");
        santa_assert_simple!(!self.is_claimed(receiver), "{receiver} is already claimed");

        self.receiver_of[giver] = Some(receiver);
        self.is_claimed[receiver] = true;
        self.num_assigned += 1;
    }

    /// Undoes the assignment of `giver`, making its receiver available again.
    pub(crate) fn unassign(&mut self, giver: ParticipantIndex) {
        let receiver = self.receiver_of[giver].take();
        santa_assert_simple!(receiver.is_some(), "{giver} is not assigned");

        if let Some(receiver) = receiver {
            self.is_claimed[receiver] = false;
            self.num_assigned -= 1;
        }
    }

    /// The (giver, receiver) pairs in participant order of the givers.
    pub(crate) fn pairs(&self) -> impl Iterator<Item = (ParticipantIndex, ParticipantIndex)> + '_ {
        self.receiver_of
            .iter_with_keys()
            .filter_map(|(giver, receiver)| receiver.map(|receiver| (giver, receiver)))
    }
}
