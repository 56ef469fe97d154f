use crate::basic_types::Participant;
use crate::constraints::ExclusionSet;
use crate::constraints::NoRepeatMap;

/// Everything the engine needs to know about a single draw.
///
/// The caller is responsible for deciding which constraints apply to the group (e.g. whether the
/// previous round is taken into account); the engine uses whatever it is given.
///
/// # Example
/// ```rust
/// # use santa_core::DrawRequest;
/// let request = DrawRequest::new(vec![1, 2, 3])
///     .with_exclusion(1, 2)
///     .with_previous_pairing(3, 1)
///     .with_seed(7);
///
/// assert_eq!(request.participants(), &[1, 2, 3]);
/// assert!(request.exclusions().contains(1, 2));
/// assert_eq!(request.seed(), Some(7));
/// ```
#[derive(Debug, Clone)]
pub struct DrawRequest<P> {
    participants: Vec<P>,
    exclusions: ExclusionSet<P>,
    no_repeat: NoRepeatMap<P>,
    seed: Option<u64>,
}

impl<P: Participant> DrawRequest<P> {
    pub fn new(participants: impl Into<Vec<P>>) -> Self {
        DrawRequest {
            participants: participants.into(),
            exclusions: ExclusionSet::default(),
            no_repeat: NoRepeatMap::default(),
            seed: None,
        }
    }

    pub fn with_exclusions(mut self, exclusions: ExclusionSet<P>) -> Self {
        self.exclusions = exclusions;
        self
    }

    pub fn with_exclusion(mut self, giver: P, receiver: P) -> Self {
        let _ = self.exclusions.insert(giver, receiver);
        self
    }

    pub fn with_no_repeat(mut self, no_repeat: NoRepeatMap<P>) -> Self {
        self.no_repeat = no_repeat;
        self
    }

    pub fn with_previous_pairing(mut self, giver: P, receiver: P) -> Self {
        let _ = self.no_repeat.insert(giver, receiver);
        self
    }

    /// Fixes the seed of the draw; the same request with the same seed always gives the same
    /// assignment.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn participants(&self) -> &[P] {
        &self.participants
    }

    pub fn exclusions(&self) -> &ExclusionSet<P> {
        &self.exclusions
    }

    pub fn no_repeat(&self) -> &NoRepeatMap<P> {
        &self.no_repeat
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}
