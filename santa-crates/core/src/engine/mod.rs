mod assignment_engine;
mod draw_request;
mod options;
mod partial_assignment;
mod search;
mod search_statistics;

pub use assignment_engine::*;
pub use draw_request::*;
pub use options::*;
pub(crate) use partial_assignment::*;
pub(crate) use search::*;
pub use search_statistics::*;
