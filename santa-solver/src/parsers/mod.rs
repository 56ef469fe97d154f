//! Parsers for the input formats of the solver.
mod instance;

pub use instance::*;
