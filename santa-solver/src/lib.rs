//! # Santa solver
//! Runs gift-exchange draws from instance files. The engine itself lives in the `santa-core`
//! crate, which is re-exported as [`core`]; this crate adds the parser for the `.santa` instance
//! format and the `santa-solver` binary.
//!
//! ```rust
//! # use santa_solver::parsers::parse_instance;
//! let source = "c a family of three\np santa 3\nn 1 2 3\nx 1 2\n";
//! let instance = parse_instance(source.as_bytes()).expect("valid instance");
//!
//! let assignment = santa_solver::core::AssignmentEngine::default()
//!     .generate(&instance.into_request(Some(9)))
//!     .expect("the draw is feasible");
//!
//! assert_eq!(assignment.receiver_of(1), Some(3));
//! ```
pub use santa_core as core;

pub mod parsers;
