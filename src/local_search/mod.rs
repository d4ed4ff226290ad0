//! Local search for improving constructed solutions.

mod two_opt;

pub use two_opt::{route_distance, two_opt};
