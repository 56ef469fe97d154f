use std::time::Duration;

use crate::statistics::log_statistic;
use crate::statistics::log_statistic_postfix;
use crate::statistics::should_log_statistics;

/// Statistics of the most recent run of the [`AssignmentEngine`].
///
/// [`AssignmentEngine`]: crate::AssignmentEngine
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStatistics {
    /// The number of attempts which were started
    pub num_attempts: u64,
    /// The number of tentative (giver, receiver) assignments
    pub num_decisions: u64,
    /// The number of tentative assignments which were undone
    pub num_backtracks: u64,
    /// The largest number of givers which were assigned at the same time
    pub peak_depth: u64,
    /// The time spent in building the constraints and searching
    pub time_spent: Duration,
}

impl SearchStatistics {
    /// Logs the statistics, if statistic logging has been configured.
    pub fn log(&self) {
        if !should_log_statistics() {
            return;
        }

        log_statistic("num_attempts", self.num_attempts);
        log_statistic("num_decisions", self.num_decisions);
        log_statistic("num_backtracks", self.num_backtracks);
        log_statistic("peak_depth", self.peak_depth);
        log_statistic("solve_time", self.time_spent.as_secs_f64());
        log_statistic_postfix();
    }
}
