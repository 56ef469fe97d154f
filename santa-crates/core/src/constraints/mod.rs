//! The constraints which restrict which receiver a giver may be assigned.
//!
//! Next to the implicit constraint that nobody can be their own receiver, a draw supports two
//! kinds of constraints:
//! * [`ExclusionSet`]: explicitly forbidden (giver, receiver) pairs. These are directional; `(a,
//!   b)` does not forbid `(b, a)`.
//! * [`NoRepeatMap`]: the pairings of the previous round, which should not be drawn again.
//!
//! Both are folded into a per-giver list of allowed receivers before the search starts.
mod allowed_receivers;
mod exclusion_set;
mod no_repeat_map;

pub(crate) use allowed_receivers::*;
pub use exclusion_set::*;
pub use no_repeat_map::*;
