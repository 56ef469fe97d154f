mod in_order_tie_breaker;

pub(crate) use in_order_tie_breaker::*;

/// Selects a single candidate from a stream of (candidate, value) pairs.
///
/// Candidates are offered through [`TieBreaker::consider`], after which [`TieBreaker::select`]
/// returns the chosen candidate and resets the tie-breaker for the next selection.
pub(crate) trait TieBreaker<Var, Value> {
    fn consider(&mut self, variable: Var, value: Value);

    fn select(&mut self) -> Option<Var>;
}
