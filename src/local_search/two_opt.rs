//! Constrained intra-route 2-opt improvement.
//!
//! # Algorithm
//!
//! Per route, first-improvement 2-opt: reverse a contiguous segment
//! `route[i..=j]` with `0 < i < j < n - 1`, never touching the anchoring
//! parkings. A candidate is rejected outright when the segment mixes
//! loading and unloading stops (the reversal would corrupt the
//! loads-before-unloads order) or contains more than one charger. A move
//! is accepted only if it strictly decreases the whole-route distance; on
//! acceptance the scan restarts. The route converges when a full scan
//! yields no accepted move.
//!
//! Termination is guaranteed: every accepted move strictly decreases the
//! route distance, so no route state can repeat and the number of
//! improving moves is finite.
//!
//! # Complexity
//!
//! O(n²) per scan, repeated until convergence.

use tracing::debug;

use crate::models::{Route, Solution, StopId, StopKind};
use crate::network::NetworkModel;

/// Applies constrained 2-opt to every route of a solution.
///
/// Returns a new solution with freshly folded aggregates and recomputed
/// feasibility flags; the input solution is left untouched so callers can
/// keep it for comparison.
pub fn two_opt(model: &NetworkModel, solution: &Solution) -> Solution {
    let mut improved = Solution::new(model);
    for route in solution.routes() {
        improved.add_route(model, improve_route(model, route.clone()));
    }
    improved.complete_feasibility(model);
    improved
}

/// Sum of consecutive-pair distances over a route.
pub fn route_distance(model: &NetworkModel, route: &Route) -> f64 {
    route.edges().map(|(a, b)| model.distance(a, b)).sum()
}

fn improve_route(model: &NetworkModel, mut route: Route) -> Route {
    let n = route.len();
    if n < 4 {
        return route;
    }

    let mut improved = true;
    while improved {
        improved = false;
        let current_distance = route_distance(model, &route);

        'scan: for i in 1..n - 2 {
            for j in i + 1..n - 1 {
                if !segment_reversible(model, &route.stops()[i..=j]) {
                    continue;
                }

                let mut candidate = route.clone();
                candidate.reverse_segment(i, j);

                let candidate_distance = route_distance(model, &candidate);
                if candidate_distance < current_distance {
                    debug!(
                        i,
                        j,
                        before = current_distance,
                        after = candidate_distance,
                        "accepted 2-opt move"
                    );
                    route = candidate;
                    improved = true;
                    break 'scan;
                }
            }
        }
    }

    route
}

/// A segment may be reversed unless it mixes loading and unloading stops
/// or contains more than one charger.
fn segment_reversible(model: &NetworkModel, segment: &[StopId]) -> bool {
    let mut has_loading = false;
    let mut has_unloading = false;
    let mut chargers = 0;

    for &stop in segment {
        match model.kind_of(stop) {
            StopKind::Loading => has_loading = true,
            StopKind::Unloading => has_unloading = true,
            StopKind::Charger => chargers += 1,
            StopKind::Parking => {}
        }
    }

    !(has_loading && has_unloading) && chargers <= 1
}
