//! The outcome of a draw: either an [`Assignment`] or an [`AssignmentError`] explaining why no
//! assignment was produced.
mod assignment;
mod error;

pub use assignment::*;
pub use error::*;
