//! Constructive heuristics for building initial solutions.

mod nearest_neighbor;

pub use nearest_neighbor::nearest_neighbor;
