use log::trace;

use super::PartialAssignment;
use super::SearchStatistics;
use crate::basic_types::ParticipantIndex;
use crate::basic_types::Random;
use crate::branching::GiverSelector;
use crate::branching::ReceiverSelector;
use crate::branching::SelectionContext;
use crate::constraints::AllowedReceivers;
use crate::santa_assert_advanced;
use crate::santa_assert_simple;

/// A depth-first search over the receivers of the givers.
///
/// At every level the [`GiverSelector`] picks an unassigned giver, the [`ReceiverSelector`] orders
/// its available receivers, and the receivers are tried one by one. The first complete assignment
/// which is found ends the search; a level whose receivers are all exhausted undoes its tentative
/// assignment and returns to the level above it.
#[derive(Debug)]
pub(crate) struct BacktrackingSearch<'a, Givers, Receivers> {
    allowed: &'a AllowedReceivers,
    partial: PartialAssignment,
    giver_selector: Givers,
    receiver_selector: Receivers,
}

impl<'a, Givers: GiverSelector, Receivers: ReceiverSelector>
    BacktrackingSearch<'a, Givers, Receivers>
{
    pub(crate) fn new(
        allowed: &'a AllowedReceivers,
        giver_selector: Givers,
        receiver_selector: Receivers,
    ) -> Self {
        BacktrackingSearch {
            allowed,
            partial: PartialAssignment::new(allowed.num_participants()),
            giver_selector,
            receiver_selector,
        }
    }

    /// Runs a single attempt from an empty assignment, considering the givers in `giver_order`.
    ///
    /// Returns whether a complete assignment was found; if so, it can be retrieved through
    /// [`BacktrackingSearch::pairs`].
    pub(crate) fn attempt(
        &mut self,
        giver_order: &[ParticipantIndex],
        random: &mut dyn Random,
        statistics: &mut SearchStatistics,
    ) -> bool {
        santa_assert_simple!(giver_order.len() == self.allowed.num_participants());

        self.partial.clear();
        self.extend(giver_order, random, statistics)
    }

    fn extend(
        &mut self,
        giver_order: &[ParticipantIndex],
        random: &mut dyn Random,
        statistics: &mut SearchStatistics,
    ) -> bool {
        if self.partial.is_complete() {
            return true;
        }

        let context = SelectionContext::new(giver_order, self.allowed, &self.partial);
        let Some(giver) = self.giver_selector.select_giver(&context) else {
            return self.partial.is_complete();
        };

        let mut candidates = self
            .partial
            .available_receivers(giver, self.allowed)
            .collect::<Vec<_>>();
        self.receiver_selector.order_receivers(&mut candidates, random);

        trace!(
            "Depth {}: giver {giver} has {} candidate(s)",
            self.partial.num_assigned(),
            candidates.len()
        );

        for receiver in candidates {
            santa_assert_advanced!(self.allowed.is_allowed(giver, receiver));

            self.partial.assign(giver, receiver);
            statistics.num_decisions += 1;
            statistics.peak_depth = statistics.peak_depth.max(self.partial.num_assigned() as u64);

            if self.extend(giver_order, random, statistics) {
                return true;
            }

            self.partial.unassign(giver);
            statistics.num_backtracks += 1;
        }

        false
    }

    /// The (giver, receiver) pairs of the current assignment, in participant order.
    pub(crate) fn pairs(&self) -> impl Iterator<Item = (ParticipantIndex, ParticipantIndex)> + '_ {
        self.partial.pairs()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use super::*;
    use crate::basic_types::tests::TestRandom;
    use crate::basic_types::ParticipantTable;
    use crate::branching::InputOrderGiver;
    use crate::branching::MostConstrainedGiver;
    use crate::branching::RandomReceiverOrder;
    use crate::constraints::ExclusionSet;
    use crate::constraints::NoRepeatMap;

    fn setup(
        participants: &[u32],
        exclusions: &[(u32, u32)],
    ) -> (ParticipantTable<u32>, AllowedReceivers) {
        let table = ParticipantTable::new(participants).unwrap();
        let allowed = AllowedReceivers::new(
            &table,
            &exclusions.iter().copied().collect::<ExclusionSet<_>>(),
            &NoRepeatMap::new(),
        );
        (table, allowed)
    }

    fn identifier_pairs<G: GiverSelector, R: ReceiverSelector>(
        table: &ParticipantTable<u32>,
        search: &BacktrackingSearch<'_, G, R>,
    ) -> Vec<(u32, u32)> {
        search
            .pairs()
            .map(|(giver, receiver)| (table.identifier(giver), table.identifier(receiver)))
            .collect()
    }

    #[test]
    fn two_participants_swap_without_randomness() {
        let (table, allowed) = setup(&[10, 20], &[]);
        let order = table.indices().collect::<Vec<_>>();
        let mut statistics = SearchStatistics::default();
        // Every giver has a single candidate, so nothing is drawn
        let mut random = TestRandom::default();

        let mut search =
            BacktrackingSearch::new(&allowed, MostConstrainedGiver::default(), RandomReceiverOrder);

        assert!(search.attempt(&order, &mut random, &mut statistics));
        assert_eq!(identifier_pairs(&table, &search), vec![(10, 20), (20, 10)]);
        assert_eq!(statistics.num_decisions, 2);
        assert_eq!(statistics.num_backtracks, 0);
        assert_eq!(statistics.peak_depth, 2);
    }

    #[test]
    fn candidate_order_is_drawn_from_the_random_source() {
        let (table, allowed) = setup(&[1, 2, 3], &[]);
        let order = table.indices().collect::<Vec<_>>();
        let mut statistics = SearchStatistics::default();

        let mut search =
            BacktrackingSearch::new(&allowed, MostConstrainedGiver::default(), RandomReceiverOrder);

        // 1 tries [3, 2]
        let mut random = TestRandom { usizes: vec![0] };
        assert!(search.attempt(&order, &mut random, &mut statistics));
        assert_eq!(identifier_pairs(&table, &search), vec![(1, 3), (2, 1), (3, 2)]);

        // 1 tries [2, 3]
        let mut random = TestRandom { usizes: vec![1] };
        assert!(search.attempt(&order, &mut random, &mut statistics));
        assert_eq!(identifier_pairs(&table, &search), vec![(1, 2), (2, 3), (3, 1)]);
    }

    #[test]
    fn input_order_backtracks_out_of_dead_ends() {
        // 1 may give to 2 or 3, and 3 may only give to 2
        let (table, allowed) = setup(&[1, 2, 3, 4], &[(1, 4), (3, 1), (3, 4)]);
        let order = table.indices().collect::<Vec<_>>();
        let mut statistics = SearchStatistics::default();
        // Every shuffle keeps the candidates in participant order
        let mut random = TestRandom {
            usizes: vec![1, 2, 1, 1],
        };

        let mut search = BacktrackingSearch::new(&allowed, InputOrderGiver, RandomReceiverOrder);

        assert!(search.attempt(&order, &mut random, &mut statistics));
        assert_eq!(
            identifier_pairs(&table, &search),
            vec![(1, 3), (2, 4), (3, 2), (4, 1)]
        );
        assert_eq!(statistics.num_decisions, 10);
        assert_eq!(statistics.num_backtracks, 6);
        assert!(random.usizes.is_empty());
    }

    #[test]
    fn most_constrained_giver_avoids_the_dead_ends() {
        let (table, allowed) = setup(&[1, 2, 3, 4], &[(1, 4), (3, 1), (3, 4)]);
        let order = table.indices().collect::<Vec<_>>();
        let mut statistics = SearchStatistics::default();
        let mut random = TestRandom::default();

        let mut search =
            BacktrackingSearch::new(&allowed, MostConstrainedGiver::default(), RandomReceiverOrder);

        assert!(search.attempt(&order, &mut random, &mut statistics));
        assert_eq!(
            identifier_pairs(&table, &search),
            vec![(1, 3), (2, 4), (3, 2), (4, 1)]
        );
        assert_eq!(statistics.num_decisions, 4);
        assert_eq!(statistics.num_backtracks, 0);
    }

    #[test]
    fn infeasible_instance_exhausts_the_attempt() {
        // 1, 2 and 3 can only give to 4
        let (table, allowed) = setup(
            &[1, 2, 3, 4],
            &[(1, 2), (1, 3), (2, 1), (2, 3), (3, 1), (3, 2)],
        );
        let order = table.indices().collect::<Vec<_>>();
        let mut statistics = SearchStatistics::default();
        let mut random = SmallRng::seed_from_u64(3);

        let mut search =
            BacktrackingSearch::new(&allowed, MostConstrainedGiver::default(), RandomReceiverOrder);

        assert!(!search.attempt(&order, &mut random, &mut statistics));
        assert_eq!(search.pairs().count(), 0);
        assert_eq!(statistics.num_decisions, statistics.num_backtracks);
    }
}
