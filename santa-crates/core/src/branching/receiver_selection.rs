use crate::basic_types::shuffle;
use crate::basic_types::ParticipantIndex;
use crate::basic_types::Random;

/// Determines the order in which the available receivers of the selected giver are tried.
pub(crate) trait ReceiverSelector {
    fn order_receivers(&mut self, receivers: &mut [ParticipantIndex], random: &mut dyn Random);
}

/// A [`ReceiverSelector`] which tries the available receivers in a uniformly random order.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct RandomReceiverOrder;

impl ReceiverSelector for RandomReceiverOrder {
    fn order_receivers(&mut self, receivers: &mut [ParticipantIndex], random: &mut dyn Random) {
        shuffle(receivers, random)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::tests::TestRandom;
    use crate::containers::StorageKey;

    #[test]
    fn receivers_are_shuffled_with_the_provided_random() {
        let mut receivers = (0..3).map(ParticipantIndex::create_from_index).collect::<Vec<_>>();
        let mut random = TestRandom {
            usizes: vec![0, 0],
        };

        RandomReceiverOrder.order_receivers(&mut receivers, &mut random);

        assert_eq!(
            receivers,
            [1, 2, 0].map(ParticipantIndex::create_from_index).to_vec()
        );
    }
}
