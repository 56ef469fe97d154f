//! # Santa core
//! The assignment engine behind a gift-exchange draw. Given the participants of a group, the
//! (directional) pairs which are not allowed to be drawn and the pairings of the previous round,
//! the engine computes a mapping from givers to receivers in which every participant gives
//! exactly one gift and receives exactly one gift.
//!
//! The search is a randomised backtracking search which always extends the partial assignment
//! with the giver that has the fewest receivers left (first-fail), and which restarts with a
//! fresh random order of the givers when an attempt does not lead to a complete assignment.
//! All randomness flows through the [`Random`] trait; when a seed is provided, the result is
//! fully determined by it.
//!
//! # Example
//! ```rust
//! # use santa_core::generate_assignment;
//! # use santa_core::constraints::ExclusionSet;
//! # use santa_core::constraints::NoRepeatMap;
//! let participants = [1, 2, 3, 4];
//! // 1 is not allowed to give a gift to 2 (but 2 may still give to 1)
//! let exclusions = ExclusionSet::from_iter([(1, 2)]);
//! // Last year 3 gave a gift to 4
//! let no_repeat = NoRepeatMap::from_iter([(3, 4)]);
//!
//! let assignment =
//!     generate_assignment(&participants, Some(&exclusions), Some(&no_repeat), Some(42), None)
//!         .expect("the draw is feasible");
//!
//! assert_eq!(assignment.len(), 4);
//! assert_ne!(assignment.receiver_of(1), Some(2));
//! assert_ne!(assignment.receiver_of(3), Some(4));
//! assert_eq!(assignment.seed(), Some(42));
//! ```
pub(crate) mod basic_types;
pub(crate) mod branching;
pub(crate) mod engine;

#[doc(hidden)]
pub mod asserts;
pub mod checking;
pub mod constraints;
pub mod containers;
pub mod results;
pub mod statistics;

pub use convert_case;
pub use rand;

pub use crate::basic_types::Participant;
pub use crate::basic_types::Random;
pub use crate::engine::generate_assignment;
pub use crate::engine::AssignmentEngine;
pub use crate::engine::DrawRequest;
pub use crate::engine::EngineOptions;
pub use crate::engine::SearchStatistics;
pub use crate::engine::DEFAULT_MAX_ATTEMPTS;
pub use crate::results::Assignment;
pub use crate::results::AssignmentError;
