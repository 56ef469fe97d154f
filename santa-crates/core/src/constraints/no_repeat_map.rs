use log::debug;

use crate::basic_types::Participant;
use crate::containers::HashMap;

/// The pairings of the previous round, mapping each giver to the receiver they were assigned.
///
/// A giver which is not present in the map has no restriction; the map does not need to cover all
/// participants of the new round.
#[derive(Debug, Clone)]
pub struct NoRepeatMap<P> {
    previous_receivers: HashMap<P, P>,
}

impl<P> Default for NoRepeatMap<P> {
    fn default() -> Self {
        NoRepeatMap {
            previous_receivers: HashMap::default(),
        }
    }
}

impl<P: Participant> PartialEq for NoRepeatMap<P> {
    fn eq(&self, other: &Self) -> bool {
        self.previous_receivers == other.previous_receivers
    }
}

impl<P: Participant> Eq for NoRepeatMap<P> {}

impl<P: Participant> NoRepeatMap<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the map from the assignment history of a group.
    ///
    /// Every record is a `(round, giver, receiver)` triple, where the round can be anything which
    /// orders the rounds (e.g. the time at which the round was drawn). Only the records of the most
    /// recent round are kept; older rounds do not restrict the new draw.
    ///
    /// # Example
    /// ```rust
    /// # use santa_core::constraints::NoRepeatMap;
    /// let history = [(2023, 1, 2), (2023, 2, 1), (2024, 1, 3), (2024, 3, 1)];
    ///
    /// let no_repeat = NoRepeatMap::from_latest_round(history);
    ///
    /// assert_eq!(no_repeat.previous_receiver(1), Some(3));
    /// assert_eq!(no_repeat.previous_receiver(2), None);
    /// ```
    pub fn from_latest_round<Round: Ord>(
        history: impl IntoIterator<Item = (Round, P, P)>,
    ) -> Self {
        let mut latest_round: Option<Round> = None;
        let mut no_repeat = NoRepeatMap::new();

        for (round, giver, receiver) in history {
            match latest_round.as_ref().map(|latest| round.cmp(latest)) {
                Some(std::cmp::Ordering::Less) => continue,
                Some(std::cmp::Ordering::Equal) => {}
                Some(std::cmp::Ordering::Greater) | None => {
                    no_repeat.previous_receivers.clear();
                    latest_round = Some(round);
                }
            }

            let _ = no_repeat.previous_receivers.insert(giver, receiver);
        }

        debug!(
            "Derived {} previous pairings from the assignment history",
            no_repeat.len()
        );

        no_repeat
    }

    /// Records that `giver` was assigned `receiver` in the previous round.
    ///
    /// Returns the receiver which was previously recorded for the giver (if any).
    pub fn insert(&mut self, giver: P, receiver: P) -> Option<P> {
        self.previous_receivers.insert(giver, receiver)
    }

    pub fn previous_receiver(&self, giver: P) -> Option<P> {
        self.previous_receivers.get(&giver).copied()
    }

    /// Returns whether assigning `receiver` to `giver` would repeat the previous round.
    pub fn is_repeat(&self, giver: P, receiver: P) -> bool {
        self.previous_receiver(giver) == Some(receiver)
    }

    pub fn len(&self) -> usize {
        self.previous_receivers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.previous_receivers.is_empty()
    }

    /// Iterate over the (giver, receiver) pairs of the previous round, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (P, P)> + '_ {
        self.previous_receivers
            .iter()
            .map(|(&giver, &receiver)| (giver, receiver))
    }
}

impl<P: Participant> FromIterator<(P, P)> for NoRepeatMap<P> {
    fn from_iter<T: IntoIterator<Item = (P, P)>>(iter: T) -> Self {
        NoRepeatMap {
            previous_receivers: iter.into_iter().collect(),
        }
    }
}
