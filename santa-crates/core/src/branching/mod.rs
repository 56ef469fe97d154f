//! Contains the decisions of the search: which giver to extend the partial assignment with
//! ([`GiverSelector`]) and in which order its receivers are tried ([`ReceiverSelector`]).
mod giver_selection;
mod receiver_selection;
mod selection_context;
pub(crate) mod tie_breaking;

pub(crate) use giver_selection::*;
pub(crate) use receiver_selection::*;
pub(crate) use selection_context::*;
