/// The number of attempts the engine makes before giving up when no bound is provided.
pub const DEFAULT_MAX_ATTEMPTS: usize = 200;

/// Options for the [`AssignmentEngine`] which determine how it behaves.
///
/// [`AssignmentEngine`]: crate::AssignmentEngine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// The number of independent randomised attempts before the engine reports
    /// [`AssignmentError::AssignmentExhausted`]. With zero attempts every feasible-looking draw is
    /// reported as exhausted.
    ///
    /// [`AssignmentError::AssignmentExhausted`]: crate::AssignmentError::AssignmentExhausted
    pub max_attempts: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        EngineOptions {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl EngineOptions {
    pub fn with_max_attempts(max_attempts: usize) -> Self {
        EngineOptions { max_attempts }
    }
}
