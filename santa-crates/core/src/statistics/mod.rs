//! Contains the structures and functions for logging the statistics of a draw.
mod statistic_logging;

pub use statistic_logging::*;
