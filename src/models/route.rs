//! Route type.

use super::StopId;

/// An ordered sequence of stop ids driven by one vehicle.
///
/// The invariants (starts and ends at a parking, loadings before
/// unloadings, at most one charger) are checked by the
/// [`FeasibilityChecker`](crate::evaluation::FeasibilityChecker), not
/// assumed here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Route {
    stops: Vec<StopId>,
}

impl Route {
    /// Creates an empty route.
    pub fn new() -> Self {
        Self { stops: Vec::new() }
    }

    /// Creates a route from an existing stop sequence.
    pub fn from_stops(stops: Vec<StopId>) -> Self {
        Self { stops }
    }

    /// Appends a stop to the end of the route.
    pub fn push(&mut self, stop: StopId) {
        self.stops.push(stop);
    }

    /// Inserts a stop before position `index`.
    pub fn insert(&mut self, index: usize, stop: StopId) {
        self.stops.insert(index, stop);
    }

    /// Reverses the segment `[i..=j]` in place.
    pub fn reverse_segment(&mut self, i: usize, j: usize) {
        self.stops[i..=j].reverse();
    }

    /// The ordered stop sequence.
    pub fn stops(&self) -> &[StopId] {
        &self.stops
    }

    /// Number of stops in the sequence.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if the route has no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// First stop, if any.
    pub fn first(&self) -> Option<StopId> {
        self.stops.first().copied()
    }

    /// Last stop, if any.
    pub fn last(&self) -> Option<StopId> {
        self.stops.last().copied()
    }

    /// Iterates over consecutive `(from, to)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (StopId, StopId)> + '_ {
        self.stops.windows(2).map(|w| (w[0], w[1]))
    }
}
