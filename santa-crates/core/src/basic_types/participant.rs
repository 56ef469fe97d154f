use std::fmt::Debug;
use std::fmt::Display;
use std::hash::Hash;

use crate::containers::HashMap;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;

/// The identifier of a participant of a draw.
///
/// The engine never looks inside an identifier; it only needs to hash, compare and print it. The
/// trait is implemented for every type which satisfies these requirements (e.g. the integer ids of
/// a user table).
pub trait Participant: Copy + Eq + Hash + Ord + Debug + Display {}

impl<T> Participant for T where T: Copy + Eq + Hash + Ord + Debug + Display {}

/// The position of a participant in the participant list of a draw.
///
/// Internally the engine only works with these dense indices, which makes the search independent
/// of how identifiers hash.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct ParticipantIndex(u32);

#[cfg(test)]
impl ParticipantIndex {
    pub(crate) fn new(index: u32) -> Self {
        ParticipantIndex(index)
    }
}

impl StorageKey for ParticipantIndex {
    fn index(&self) -> usize {
        self.0 as usize
    }

    fn create_from_index(index: usize) -> Self {
        ParticipantIndex(index as u32)
    }
}

impl Display for ParticipantIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Translation between participant identifiers and their [`ParticipantIndex`].
#[derive(Debug, Clone)]
pub(crate) struct ParticipantTable<P> {
    identifiers: KeyedVec<ParticipantIndex, P>,
    indices: HashMap<P, ParticipantIndex>,
}

impl<P: Participant> ParticipantTable<P> {
    /// Creates the table in the order of `participants`.
    ///
    /// Returns the first identifier which occurs twice as the error.
    pub(crate) fn new(participants: &[P]) -> Result<Self, P> {
        let mut identifiers = KeyedVec::default();
        let mut indices = HashMap::default();

        for &participant in participants {
            let index = identifiers.push(participant);
            if indices.insert(participant, index).is_some() {
                return Err(participant);
            }
        }

        Ok(ParticipantTable {
            identifiers,
            indices,
        })
    }

    pub(crate) fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub(crate) fn index_of(&self, participant: P) -> Option<ParticipantIndex> {
        self.indices.get(&participant).copied()
    }

    pub(crate) fn identifier(&self, index: ParticipantIndex) -> P {
        self.identifiers[index]
    }

    pub(crate) fn indices(&self) -> impl Iterator<Item = ParticipantIndex> + '_ {
        self.identifiers.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_input_order() {
        let table = ParticipantTable::new(&[30, 10, 20]).expect("no duplicates");

        assert_eq!(table.len(), 3);
        assert_eq!(table.index_of(30), Some(ParticipantIndex::new(0)));
        assert_eq!(table.index_of(20), Some(ParticipantIndex::new(2)));
        assert_eq!(table.identifier(ParticipantIndex::new(1)), 10);
        assert_eq!(table.index_of(40), None);
    }

    #[test]
    fn duplicates_are_reported() {
        let result = ParticipantTable::new(&["ann", "bob", "ann"]);

        assert!(matches!(result, Err("ann")));
    }
}
