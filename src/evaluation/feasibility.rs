//! Route and solution feasibility checks.

use thiserror::Error;
use tracing::warn;

use crate::models::{Route, Solution, StopKind};
use crate::network::NetworkModel;

/// Why a route failed the route-level feasibility check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteViolation {
    #[error("route is empty")]
    EmptyRoute,
    /// The first stop is not a parking.
    #[error("route does not start at a parking: {stop}")]
    StartsOffParking { stop: String },
    /// The last stop is not a parking.
    #[error("route does not end at a parking: {stop}")]
    EndsOffParking { stop: String },
    /// A loading stop appears after an unloading stop.
    #[error("route has loading after unloading: {stop}")]
    LoadingAfterUnloading { stop: String },
}

/// Validates routes and solutions against the domain ordering rules.
///
/// Both checks are pure: they return a verdict and emit the diagnostic
/// reason through `tracing`, but never mutate anything.
pub struct FeasibilityChecker<'a> {
    model: &'a NetworkModel,
}

impl<'a> FeasibilityChecker<'a> {
    /// Creates a checker over the given network.
    pub fn new(model: &'a NetworkModel) -> Self {
        Self { model }
    }

    /// Route-level check: non-empty, parking at both ends, and no loading
    /// stop after the first unloading stop in the sequence.
    pub fn check_route(&self, route: &Route) -> Result<(), RouteViolation> {
        let (Some(first), Some(last)) = (route.first(), route.last()) else {
            return Err(RouteViolation::EmptyRoute);
        };

        if !self.model.is_kind(first, StopKind::Parking) {
            return Err(RouteViolation::StartsOffParking {
                stop: self.model.name_of(first).to_owned(),
            });
        }
        if !self.model.is_kind(last, StopKind::Parking) {
            return Err(RouteViolation::EndsOffParking {
                stop: self.model.name_of(last).to_owned(),
            });
        }

        let mut unloading_seen = false;
        for &stop in route.stops() {
            match self.model.kind_of(stop) {
                StopKind::Unloading => unloading_seen = true,
                StopKind::Loading if unloading_seen => {
                    return Err(RouteViolation::LoadingAfterUnloading {
                        stop: self.model.name_of(stop).to_owned(),
                    });
                }
                _ => {}
            }
        }

        Ok(())
    }

    /// Returns `true` if the union of stops across all routes covers every
    /// loading and unloading stop of the network.
    ///
    /// Coverage only: a stop visited more than once still counts.
    pub fn all_demand_covered(&self, solution: &Solution) -> bool {
        let mut visited = vec![false; self.model.num_stops()];
        for route in solution.routes() {
            for &stop in route.stops() {
                visited[stop.index()] = true;
            }
        }
        self.model
            .loadings()
            .iter()
            .chain(self.model.unloadings())
            .all(|&stop| visited[stop.index()])
    }

    /// Solution-level check: every route passes [`check_route`] and all
    /// loading/unloading stops are covered.
    ///
    /// [`check_route`]: FeasibilityChecker::check_route
    pub fn check_solution(&self, solution: &Solution) -> bool {
        let mut routes_ok = true;
        for (index, route) in solution.routes().iter().enumerate() {
            if let Err(reason) = self.check_route(route) {
                warn!(route = index, %reason, "route fails feasibility check");
                routes_ok = false;
            }
        }
        routes_ok && self.all_demand_covered(solution)
    }
}
