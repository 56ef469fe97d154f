#![cfg(test)]

use proptest::collection::btree_set;
use proptest::collection::vec;
use proptest::prelude::*;
use santa_solver::core::checking::verify_assignment;
use santa_solver::core::constraints::ExclusionSet;
use santa_solver::core::constraints::NoRepeatMap;
use santa_solver::core::generate_assignment;
use santa_solver::core::AssignmentEngine;
use santa_solver::core::AssignmentError;
use santa_solver::core::DrawRequest;
use santa_solver::core::EngineOptions;

/// Keeps infeasible instances from searching for too long.
const MAX_ATTEMPTS: usize = 20;

fn participants(max_size: usize) -> impl Strategy<Value = Vec<u32>> {
    btree_set(0_u32..1000, 2..max_size).prop_map(|participants| participants.into_iter().collect())
}

/// Participants together with pairs of positions in the participant list.
fn participants_with_pairs() -> impl Strategy<Value = (Vec<u32>, Vec<(u32, u32)>)> {
    (participants(8), vec((any::<usize>(), any::<usize>()), 0..16)).prop_map(
        |(participants, positions)| {
            let pairs = positions
                .into_iter()
                .map(|(giver, receiver)| {
                    (
                        participants[giver % participants.len()],
                        participants[receiver % participants.len()],
                    )
                })
                .collect();
            (participants, pairs)
        },
    )
}

proptest! {
    #[test]
    fn unconstrained_draws_always_succeed(participants in participants(40), seed in any::<u64>()) {
        let assignment = generate_assignment(&participants, None, None, Some(seed), None)
            .expect("every group of at least two participants has a derangement");

        prop_assert_eq!(assignment.len(), participants.len());
        prop_assert_eq!(assignment.seed(), Some(seed));
        for (giver, receiver) in assignment.iter() {
            prop_assert_ne!(giver, receiver);
        }
        prop_assert_eq!(
            verify_assignment(&participants, &ExclusionSet::new(), &NoRepeatMap::new(), &assignment),
            Ok(())
        );
    }

    #[test]
    fn successful_draws_respect_all_constraints(
        (participants, exclusions) in participants_with_pairs(),
        previous_round in vec(any::<usize>(), 0..12),
        seed in any::<u64>(),
    ) {
        let exclusions = exclusions.into_iter().collect::<ExclusionSet<_>>();
        // A previous round pairs participants with their successor in a rotated list
        let no_repeat = previous_round
            .iter()
            .map(|&position| {
                let giver = position % participants.len();
                let receiver = (giver + 1) % participants.len();
                (participants[giver], participants[receiver])
            })
            .collect::<NoRepeatMap<_>>();

        match generate_assignment(&participants, Some(&exclusions), Some(&no_repeat), Some(seed), Some(MAX_ATTEMPTS)) {
            Ok(assignment) => {
                prop_assert_eq!(
                    verify_assignment(&participants, &exclusions, &no_repeat, &assignment),
                    Ok(())
                );
            }
            Err(AssignmentError::InfeasibleConstraints { giver }) => {
                let has_receiver = participants.iter().any(|&receiver| {
                    receiver != giver
                        && !exclusions.contains(giver, receiver)
                        && !no_repeat.is_repeat(giver, receiver)
                });
                prop_assert!(!has_receiver);
            }
            Err(AssignmentError::AssignmentExhausted { attempts }) => {
                prop_assert_eq!(attempts, MAX_ATTEMPTS);
            }
            Err(error) => {
                prop_assert!(false, "unexpected error {}", error);
            }
        }
    }

    #[test]
    fn draws_are_determined_by_the_seed(
        (participants, exclusions) in participants_with_pairs(),
        seed in any::<u64>(),
    ) {
        let request = DrawRequest::new(participants)
            .with_exclusions(exclusions.into_iter().collect())
            .with_seed(seed);

        let options = EngineOptions::with_max_attempts(MAX_ATTEMPTS);
        let first = AssignmentEngine::new(options).generate(&request);
        let second = AssignmentEngine::new(options).generate(&request);

        prop_assert_eq!(first, second);
    }

    #[test]
    fn too_few_participants_are_rejected(participants in vec(any::<u32>(), 0..2)) {
        let result = generate_assignment(&participants, None, None, Some(0), None);

        prop_assert_eq!(
            result,
            Err(AssignmentError::TooFewParticipants { count: participants.len() })
        );
    }
}

#[test]
fn latest_round_blocks_repeats() {
    let history = [
        (2022, 1, 2),
        (2022, 2, 3),
        (2022, 3, 1),
        (2023, 1, 3),
        (2023, 3, 2),
        (2023, 2, 1),
    ];
    let no_repeat = NoRepeatMap::from_latest_round(history);

    // Only the 2023 round counts, which leaves the 2022 round as the only option
    let assignment =
        generate_assignment(&[1, 2, 3], None, Some(&no_repeat), Some(11), None).expect("feasible");

    assert_eq!(assignment.into_pairs(), vec![(1, 2), (2, 3), (3, 1)]);
}
