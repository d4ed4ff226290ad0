//! Domain model types for delivery tour planning.
//!
//! Provides the core abstractions: typed stops with dense arena ids,
//! routes as ordered stop sequences, and the solution aggregate with its
//! derived metrics and feasibility flags.

mod route;
mod solution;
mod stop;

pub use route::Route;
pub use solution::{Solution, SolutionSummary};
pub use stop::{Stop, StopId, StopKind};
