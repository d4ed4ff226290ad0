//! Feasibility checking for routes and solutions.

mod feasibility;

pub use feasibility::{FeasibilityChecker, RouteViolation};
