use crate::basic_types::Participant;
use crate::containers::HashSet;

/// A set of directional (giver, receiver) pairs which may not be drawn.
///
/// Self-pairs do not need to be added; nobody is ever assigned to themself.
#[derive(Debug, Clone)]
pub struct ExclusionSet<P> {
    pairs: HashSet<(P, P)>,
}

impl<P> Default for ExclusionSet<P> {
    fn default() -> Self {
        ExclusionSet {
            pairs: HashSet::default(),
        }
    }
}

impl<P: Participant> PartialEq for ExclusionSet<P> {
    fn eq(&self, other: &Self) -> bool {
        self.pairs == other.pairs
    }
}

impl<P: Participant> Eq for ExclusionSet<P> {}

impl<P: Participant> ExclusionSet<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forbids `giver` from being assigned `receiver`.
    ///
    /// Returns whether the pair was not yet excluded.
    pub fn insert(&mut self, giver: P, receiver: P) -> bool {
        self.pairs.insert((giver, receiver))
    }

    /// Forbids the pair in both directions.
    pub fn insert_mutual(&mut self, first: P, second: P) {
        let _ = self.insert(first, second);
        let _ = self.insert(second, first);
    }

    /// Returns whether the exclusion of `giver` to `receiver` was present.
    pub fn remove(&mut self, giver: P, receiver: P) -> bool {
        self.pairs.remove(&(giver, receiver))
    }

    pub fn contains(&self, giver: P, receiver: P) -> bool {
        self.pairs.contains(&(giver, receiver))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over the excluded pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (P, P)> + '_ {
        self.pairs.iter().copied()
    }
}

impl<P: Participant> FromIterator<(P, P)> for ExclusionSet<P> {
    fn from_iter<T: IntoIterator<Item = (P, P)>>(iter: T) -> Self {
        ExclusionSet {
            pairs: iter.into_iter().collect(),
        }
    }
}

impl<P: Participant> Extend<(P, P)> for ExclusionSet<P> {
    fn extend<T: IntoIterator<Item = (P, P)>>(&mut self, iter: T) {
        self.pairs.extend(iter)
    }
}
