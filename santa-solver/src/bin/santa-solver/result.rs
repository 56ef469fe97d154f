use std::fmt::Display;

use santa_solver::parsers::InstanceParseError;
use thiserror::Error;

pub(crate) type SolverResult<T> = Result<T, SolverError>;

#[derive(Error, Debug)]
pub(crate) enum SolverError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error("The instance was invalid, more details: {0}")]
    InvalidInstance(#[from] InstanceParseError),
    #[error("No assignment could be drawn: {0}")]
    Assignment(String),
    #[error("The drawn assignment is invalid: {0}")]
    Verification(String),
}

impl SolverError {
    pub(crate) fn assignment(error: impl Display) -> Self {
        Self::Assignment(error.to_string())
    }

    pub(crate) fn verification(error: impl Display) -> Self {
        Self::Verification(error.to_string())
    }
}
