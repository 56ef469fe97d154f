use std::time::Instant;

use log::debug;
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::BacktrackingSearch;
use super::DrawRequest;
use super::EngineOptions;
use super::SearchStatistics;
use crate::basic_types::shuffle;
use crate::basic_types::Participant;
use crate::basic_types::ParticipantTable;
use crate::basic_types::Random;
use crate::branching::MostConstrainedGiver;
use crate::branching::RandomReceiverOrder;
use crate::checking::verify_assignment;
use crate::constraints::AllowedReceivers;
use crate::constraints::ExclusionSet;
use crate::constraints::NoRepeatMap;
use crate::results::Assignment;
use crate::results::AssignmentError;
use crate::santa_assert_moderate;

/// Computes the assignment of givers to receivers for a draw.
///
/// The engine does not keep any state between draws except for the [`SearchStatistics`] of the
/// most recent draw; it can be reused for any number of (unrelated) draws.
///
/// # Example
/// ```rust
/// # use santa_core::AssignmentEngine;
/// # use santa_core::DrawRequest;
/// # use santa_core::EngineOptions;
/// let mut engine = AssignmentEngine::new(EngineOptions::default());
///
/// let request = DrawRequest::new(vec![10, 20]).with_seed(1);
/// let assignment = engine.generate(&request).expect("two participants can swap");
///
/// assert_eq!(assignment.receiver_of(10), Some(20));
/// assert_eq!(assignment.receiver_of(20), Some(10));
/// assert!(engine.statistics().num_attempts >= 1);
/// ```
#[derive(Debug, Default)]
pub struct AssignmentEngine {
    options: EngineOptions,
    statistics: SearchStatistics,
}

impl AssignmentEngine {
    pub fn new(options: EngineOptions) -> Self {
        AssignmentEngine {
            options,
            statistics: SearchStatistics::default(),
        }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// The statistics of the most recent draw.
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Draws an assignment for the request.
    ///
    /// If the request has a seed, the draw is fully determined by it, on every platform and with
    /// every version of the dependencies. Otherwise a seed is drawn from the entropy of the
    /// operating system. Either way, the seed which was used is available
    /// through [`Assignment::seed`], so that the draw can be reproduced.
    pub fn generate<P: Participant>(
        &mut self,
        request: &DrawRequest<P>,
    ) -> Result<Assignment<P>, AssignmentError<P>> {
        let seed = request.seed().unwrap_or_else(|| {
            let seed: u64 = rand::random();
            info!("No seed was provided, drew seed {seed}");
            seed
        });

        let mut random = ChaCha8Rng::seed_from_u64(seed);
        self.run(request, &mut random, Some(seed))
    }

    /// Draws an assignment for the request, using `random` as the source of randomness.
    ///
    /// The seed of the request is ignored, and the resulting [`Assignment`] does not carry a seed.
    pub fn generate_with_random<P: Participant, R: Random>(
        &mut self,
        request: &DrawRequest<P>,
        random: &mut R,
    ) -> Result<Assignment<P>, AssignmentError<P>> {
        self.run(request, random, None)
    }

    fn run<P: Participant>(
        &mut self,
        request: &DrawRequest<P>,
        random: &mut dyn Random,
        seed: Option<u64>,
    ) -> Result<Assignment<P>, AssignmentError<P>> {
        self.statistics = SearchStatistics::default();
        let start = Instant::now();

        let result = self.draw(request, random, seed);

        self.statistics.time_spent = start.elapsed();
        self.statistics.log();

        result
    }

    fn draw<P: Participant>(
        &mut self,
        request: &DrawRequest<P>,
        random: &mut dyn Random,
        seed: Option<u64>,
    ) -> Result<Assignment<P>, AssignmentError<P>> {
        let participants = request.participants();
        if participants.len() < 2 {
            return Err(AssignmentError::TooFewParticipants {
                count: participants.len(),
            });
        }

        let table =
            ParticipantTable::new(participants).map_err(AssignmentError::DuplicateParticipant)?;

        let allowed = AllowedReceivers::new(&table, request.exclusions(), request.no_repeat());
        if let Some(giver) = allowed.first_giver_without_receivers() {
            return Err(AssignmentError::InfeasibleConstraints {
                giver: table.identifier(giver),
            });
        }

        debug!(
            "Drawing {} participants with {} exclusion(s) and {} previous pairing(s)",
            participants.len(),
            request.exclusions().len(),
            request.no_repeat().len()
        );

        let max_attempts = self.options.max_attempts;
        let mut giver_order = table.indices().collect::<Vec<_>>();
        let mut search =
            BacktrackingSearch::new(&allowed, MostConstrainedGiver::default(), RandomReceiverOrder);

        for attempt in 1..=max_attempts {
            shuffle(&mut giver_order, random);
            self.statistics.num_attempts += 1;

            if search.attempt(&giver_order, random, &mut self.statistics) {
                debug!("Found a complete assignment in attempt {attempt}");

                let assignment = Assignment::new(
                    search
                        .pairs()
                        .map(|(giver, receiver)| {
                            (table.identifier(giver), table.identifier(receiver))
                        })
                        .collect(),
                    seed,
                );

                santa_assert_moderate!(verify_assignment(
                    participants,
                    request.exclusions(),
                    request.no_repeat(),
                    &assignment
                )
                .is_ok());

                return Ok(assignment);
            }

            debug!("Attempt {attempt} did not lead to a complete assignment");
        }

        Err(AssignmentError::AssignmentExhausted {
            attempts: max_attempts,
        })
    }
}

/// Draws an assignment for `participants` in a single call.
///
/// This is a shorthand for creating a [`DrawRequest`] and running it on an [`AssignmentEngine`]
/// with `max_attempts` attempts (or [`DEFAULT_MAX_ATTEMPTS`] if it is [`None`]).
///
/// [`DEFAULT_MAX_ATTEMPTS`]: crate::DEFAULT_MAX_ATTEMPTS
pub fn generate_assignment<P: Participant>(
    participants: &[P],
    exclusions: Option<&ExclusionSet<P>>,
    no_repeat: Option<&NoRepeatMap<P>>,
    seed: Option<u64>,
    max_attempts: Option<usize>,
) -> Result<Assignment<P>, AssignmentError<P>> {
    let mut request = DrawRequest::new(participants.to_vec());
    if let Some(exclusions) = exclusions {
        request = request.with_exclusions(exclusions.clone());
    }
    if let Some(no_repeat) = no_repeat {
        request = request.with_no_repeat(no_repeat.clone());
    }
    if let Some(seed) = seed {
        request = request.with_seed(seed);
    }

    let options = max_attempts
        .map(EngineOptions::with_max_attempts)
        .unwrap_or_default();

    AssignmentEngine::new(options).generate(&request)
}
