mod participant;
mod random;

pub use participant::*;
pub use random::*;
