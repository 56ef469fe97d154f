use log::warn;

use super::ExclusionSet;
use super::NoRepeatMap;
use crate::basic_types::Participant;
use crate::basic_types::ParticipantIndex;
use crate::basic_types::ParticipantTable;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;

/// For every giver, the receivers which it may be assigned when ignoring which receivers have
/// already been claimed by other givers.
///
/// Receivers are stored in participant order, so the structure does not depend on the iteration
/// order of the (hash-based) constraint containers.
#[derive(Debug, Clone)]
pub(crate) struct AllowedReceivers {
    receivers: KeyedVec<ParticipantIndex, Vec<ParticipantIndex>>,
    /// Row-major `n x n` matrix, `allowed[giver * n + receiver]`.
    allowed: Vec<bool>,
}

impl AllowedReceivers {
    /// Folds the self-exclusion, the exclusions and the previous pairings into the allowed
    /// receivers of every participant.
    ///
    /// Constraints which mention an identifier that is not part of `participants` cannot restrict
    /// anything and are skipped.
    pub(crate) fn new<P: Participant>(
        participants: &ParticipantTable<P>,
        exclusions: &ExclusionSet<P>,
        no_repeat: &NoRepeatMap<P>,
    ) -> Self {
        let num_participants = participants.len();
        let mut allowed = vec![true; num_participants * num_participants];

        for participant in participants.indices() {
            allowed[Self::position(num_participants, participant, participant)] = false;
        }

        let mut num_skipped = 0;
        for (giver, receiver) in exclusions.iter().chain(no_repeat.iter()) {
            match (participants.index_of(giver), participants.index_of(receiver)) {
                (Some(giver), Some(receiver)) => {
                    allowed[Self::position(num_participants, giver, receiver)] = false;
                }
                _ => num_skipped += 1,
            }
        }

        if num_skipped > 0 {
            warn!("Skipped {num_skipped} constraint(s) which mention unknown participants");
        }

        let mut receivers = KeyedVec::default();
        for giver in participants.indices() {
            let _ = receivers.push(
                participants
                    .indices()
                    .filter(|&receiver| allowed[Self::position(num_participants, giver, receiver)])
                    .collect::<Vec<_>>(),
            );
        }

        AllowedReceivers { receivers, allowed }
    }

    fn position(
        num_participants: usize,
        giver: ParticipantIndex,
        receiver: ParticipantIndex,
    ) -> usize {
        giver.index() * num_participants + receiver.index()
    }

    pub(crate) fn num_participants(&self) -> usize {
        self.receivers.len()
    }

    /// The allowed receivers of `giver`, in participant order.
    pub(crate) fn receivers_of(&self, giver: ParticipantIndex) -> &[ParticipantIndex] {
        &self.receivers[giver]
    }

    pub(crate) fn is_allowed(&self, giver: ParticipantIndex, receiver: ParticipantIndex) -> bool {
        self.allowed[Self::position(self.num_participants(), giver, receiver)]
    }

    /// Returns the first giver (in participant order) which cannot be assigned any receiver.
    pub(crate) fn first_giver_without_receivers(&self) -> Option<ParticipantIndex> {
        self.receivers
            .iter_with_keys()
            .find(|(_, receivers)| receivers.is_empty())
            .map(|(giver, _)| giver)
    }
}
