use std::collections::BTreeMap;
use std::fmt::Display;
use std::fmt::Formatter;

use crate::basic_types::Participant;

/// The result of a successful draw; every participant is the giver of exactly one pair and the
/// receiver of exactly one pair.
///
/// Pairs are stored in the order in which the participants were provided, so two assignments
/// compare equal exactly when they were produced for the same participant list and contain the
/// same pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment<P> {
    pairs: Vec<(P, P)>,
    seed: Option<u64>,
}

impl<P: Participant> Assignment<P> {
    pub(crate) fn new(pairs: Vec<(P, P)>, seed: Option<u64>) -> Self {
        Assignment { pairs, seed }
    }

    /// Wraps (giver, receiver) pairs which were produced elsewhere, e.g. to check them with
    /// [`verify_assignment`].
    ///
    /// [`verify_assignment`]: crate::checking::verify_assignment
    pub fn from_pairs(pairs: impl IntoIterator<Item = (P, P)>) -> Self {
        Assignment::new(pairs.into_iter().collect(), None)
    }

    /// The receiver which `giver` has to buy a gift for.
    pub fn receiver_of(&self, giver: P) -> Option<P> {
        self.pairs
            .iter()
            .find(|(candidate, _)| *candidate == giver)
            .map(|&(_, receiver)| receiver)
    }

    /// The giver which buys a gift for `receiver`.
    pub fn giver_of(&self, receiver: P) -> Option<P> {
        self.pairs
            .iter()
            .find(|(_, candidate)| *candidate == receiver)
            .map(|&(giver, _)| giver)
    }

    /// The seed from which the assignment was drawn; [`None`] if the draw used an externally
    /// provided source of randomness.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over the (giver, receiver) pairs in participant order.
    pub fn iter(&self) -> impl Iterator<Item = (P, P)> + '_ {
        self.pairs.iter().copied()
    }

    pub fn into_pairs(self) -> Vec<(P, P)> {
        self.pairs
    }

    pub fn to_map(&self) -> BTreeMap<P, P> {
        self.pairs.iter().copied().collect()
    }
}

impl<P: Participant> Display for Assignment<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (giver, receiver) in &self.pairs {
            writeln!(f, "{giver} -> {receiver}")?;
        }
        Ok(())
    }
}
