//! Solution aggregate.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::warn;

use super::{Route, StopId, StopKind};
use crate::evaluation::FeasibilityChecker;
use crate::network::NetworkModel;

/// A collection of routes over one network plus derived aggregates.
///
/// Aggregates are folded in incrementally as routes are appended: total
/// distance (km), total time (minutes), total cost (edge costs plus the
/// charging price attributed to each traversed edge's origin stop), and a
/// visit counter per charger. The two feasibility flags start out unknown
/// and are updated by [`add_route`] and [`complete_feasibility`].
///
/// A solution is owned exclusively by whichever algorithm is populating
/// it; the optimizer returns a new solution rather than mutating its
/// input.
///
/// [`add_route`]: Solution::add_route
/// [`complete_feasibility`]: Solution::complete_feasibility
#[derive(Debug, Clone)]
pub struct Solution {
    routes: Vec<Route>,
    total_distance: f64,
    total_time: f64,
    total_cost: f64,
    charger_visits: Vec<u32>,
    route_feasible: Option<bool>,
    complete_feasible: Option<bool>,
}

impl Solution {
    /// Creates an empty solution sized for the given network.
    pub fn new(model: &NetworkModel) -> Self {
        Self {
            routes: Vec::new(),
            total_distance: 0.0,
            total_time: 0.0,
            total_cost: 0.0,
            charger_visits: vec![0; model.num_stops()],
            route_feasible: None,
            complete_feasible: None,
        }
    }

    /// Appends a route and folds its metrics into the aggregates.
    ///
    /// The route-level check runs first but is advisory: the route is
    /// appended either way and the verdict lands in the route-level
    /// feasibility flag. Callers that need a hard gate must consult the
    /// flags. For every consecutive pair `(a, b)` the edge distance, time,
    /// and cost accumulate, plus the charging price of `a` (attributed at
    /// the edge origin, so a route that arrives at a charger but never
    /// departs from it pays nothing); the visit counter for `b` increments
    /// when `b` is a charger.
    pub fn add_route(&mut self, model: &NetworkModel, route: Route) {
        match FeasibilityChecker::new(model).check_route(&route) {
            Ok(()) => self.route_feasible = Some(true),
            Err(reason) => {
                warn!(%reason, "appending route that fails the route-level check");
                self.route_feasible = Some(false);
            }
        }

        for (a, b) in route.edges() {
            self.total_distance += model.distance(a, b);
            self.total_time += model.time(a, b);
            self.total_cost += model.cost(a, b) + model.charging_cost(a);
            if model.is_kind(b, StopKind::Charger) {
                self.charger_visits[b.index()] += 1;
            }
        }

        self.routes.push(route);
    }

    /// The routes held so far.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Number of routes.
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Total distance across all routes (km).
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Total travel time across all routes (minutes).
    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    /// Total cost across all routes, charging included.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// How often the given stop was visited as a charger.
    pub fn charger_visits(&self, stop: StopId) -> u32 {
        self.charger_visits[stop.index()]
    }

    /// Route-level feasibility flag; `None` until a route was checked.
    pub fn route_feasible(&self) -> Option<bool> {
        self.route_feasible
    }

    /// Complete feasibility flag; `None` until
    /// [`complete_feasibility`](Solution::complete_feasibility) ran.
    pub fn complete_feasible(&self) -> Option<bool> {
        self.complete_feasible
    }

    /// Recomputes both feasibility flags over all currently held routes.
    pub fn complete_feasibility(&mut self, model: &NetworkModel) {
        let checker = FeasibilityChecker::new(model);
        let routes_ok = self
            .routes
            .iter()
            .all(|route| checker.check_route(route).is_ok());
        self.route_feasible = Some(routes_ok);
        self.complete_feasible = Some(routes_ok && checker.all_demand_covered(self));
    }

    /// Serializable boundary view for external sinks.
    pub fn summary(&self, model: &NetworkModel) -> SolutionSummary {
        SolutionSummary {
            routes: self
                .routes
                .iter()
                .map(|route| {
                    route
                        .stops()
                        .iter()
                        .map(|&stop| model.name_of(stop).to_owned())
                        .collect()
                })
                .collect(),
            total_distance: self.total_distance,
            total_time: self.total_time,
            total_cost: self.total_cost,
            charger_visits: model
                .chargers()
                .iter()
                .map(|&c| (model.name_of(c).to_owned(), self.charger_visits[c.index()]))
                .collect(),
            route_feasible: self.route_feasible,
            complete_feasible: self.complete_feasible,
        }
    }
}

/// Metrics and routes of a [`Solution`], expressed in stop names.
#[derive(Debug, Clone, Serialize)]
pub struct SolutionSummary {
    /// Each route as its ordered stop-name sequence.
    pub routes: Vec<Vec<String>>,
    /// Total distance (km).
    pub total_distance: f64,
    /// Total travel time (minutes).
    pub total_time: f64,
    /// Total cost, charging included.
    pub total_cost: f64,
    /// Visits per charger.
    pub charger_visits: BTreeMap<String, u32>,
    /// Route-level feasibility flag, if computed.
    pub route_feasible: Option<bool>,
    /// Complete feasibility flag, if computed.
    pub complete_feasible: Option<bool>,
}
