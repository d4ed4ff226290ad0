//! Contract for the external exact-solving path.
//!
//! The optimal route assignment is produced by a general-purpose
//! mixed-integer-programming backend that lives outside this crate. Only
//! the contract such a backend must satisfy is defined here; none of its
//! search machinery is.

use std::time::Duration;

use thiserror::Error;

use crate::models::Solution;
use crate::network::NetworkModel;

/// Operational bounds handed to an exact backend.
#[derive(Debug, Clone)]
pub struct ExactSolverConfig {
    /// Upper bound on the number of vehicles the backend may use.
    pub fleet_size: usize,
    /// Per-route distance cap in km (battery range).
    pub max_route_distance: f64,
    /// Per-route arrival-time cap in minutes.
    pub max_route_time: f64,
    /// Wall-clock budget; exceeding it yields [`ExactStatus::TimeLimited`],
    /// never a silent partial result.
    pub time_budget: Duration,
}

impl Default for ExactSolverConfig {
    fn default() -> Self {
        Self {
            fleet_size: 20,
            max_route_distance: 400.0,
            max_route_time: 900.0,
            time_budget: Duration::from_secs(900),
        }
    }
}

/// How an exact backend finished.
///
/// `TimeLimited` is not equivalent to infeasible: it reports the best
/// incumbent found inside the wall-clock budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExactStatus {
    /// The returned solution is proven optimal.
    Optimal,
    /// The budget ran out; the returned solution is the best incumbent.
    TimeLimited,
}

/// Failures of the exact path. In both cases the caller receives no
/// solution object, so a zero-valued solution can never masquerade as
/// success.
#[derive(Debug, Error)]
pub enum ExactError {
    /// The problem is proven infeasible under the given configuration.
    #[error("problem proven infeasible under the given configuration")]
    Infeasible,
    /// The backend itself failed (license, process, numeric trouble).
    #[error("exact backend failure: {0}")]
    Backend(String),
}

/// An external producer of optimal (or budget-bounded) solutions.
///
/// Implementations must enforce, over the given network and config:
///
/// - every loading and unloading stop is visited exactly once across all
///   vehicles;
/// - flow conservation at every non-depot stop;
/// - each vehicle departs the base parking at most once and returns to a
///   distinguished sink at most once;
/// - exactly one charger visited per used vehicle;
/// - arrival-time propagation consistent with arc selection (big-M
///   relaxation disables the constraint on unselected arcs);
/// - every loading stop's arrival time strictly precedes every unloading
///   stop's arrival time, globally across vehicles;
/// - the per-vehicle distance cap of [`ExactSolverConfig`].
pub trait ExactBackend {
    /// Solves the instance, returning the solution together with an
    /// explicit status, or an error carrying no solution.
    fn solve(
        &self,
        model: &NetworkModel,
        config: &ExactSolverConfig,
    ) -> Result<(Solution, ExactStatus), ExactError>;
}
