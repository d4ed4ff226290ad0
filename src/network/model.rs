//! Immutable network model over typed stops.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

use super::TravelMatrix;
use crate::models::{Stop, StopId, StopKind};

/// Which edge table a construction error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    Distance,
    Time,
    Cost,
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeKind::Distance => write!(f, "distance"),
            EdgeKind::Time => write!(f, "time"),
            EdgeKind::Cost => write!(f, "cost"),
        }
    }
}

/// Errors raised while building or querying a [`NetworkModel`].
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Two stops share the same name.
    #[error("duplicate stop name: {0}")]
    DuplicateStop(String),
    /// A name-based query referenced a stop the model does not know.
    #[error("unknown stop name: {0}")]
    UnknownStop(String),
    /// An edge table lacks an entry for an ordered pair of known stops.
    #[error("missing {kind} entry for ordered pair ({from}, {to})")]
    MissingEdge {
        kind: EdgeKind,
        from: String,
        to: String,
    },
    /// A self-pair entry must be zero.
    #[error("nonzero {kind} entry {value} for self-pair ({stop}, {stop})")]
    NonzeroSelfEdge {
        kind: EdgeKind,
        stop: String,
        value: f64,
    },
    /// A charging price was supplied for a stop that is not a charger.
    #[error("charging price given for non-charger stop: {0}")]
    PriceOnNonCharger(String),
    /// No parking stop exists; no algorithm can run without a base.
    #[error("network has no parking stop; a base stop is required")]
    NoParking,
}

/// Static routing data: typed stops, pairwise distance/time/cost lookups,
/// and per-charger energy prices.
///
/// Built once from external tables, validated exhaustively, and read-only
/// thereafter, so it can be shared freely across any number of concurrent
/// solution-building attempts. Stop names are interned into dense
/// [`StopId`] indices; all hot-path queries are id-based and total.
#[derive(Debug)]
pub struct NetworkModel {
    stops: Vec<Stop>,
    index: HashMap<String, StopId>,
    distances: TravelMatrix,
    times: TravelMatrix,
    costs: TravelMatrix,
    charging_prices: Vec<f64>,
    parkings: Vec<StopId>,
    loadings: Vec<StopId>,
    unloadings: Vec<StopId>,
    chargers: Vec<StopId>,
}

impl NetworkModel {
    /// Builds a model from a stop list and pair-keyed edge tables.
    ///
    /// Every ordered pair of known stops must be present in all three edge
    /// tables, with self-pairs valued zero; `charging_prices` is keyed by
    /// charger name (a charger without an entry charges nothing). Missing
    /// or malformed entries fail here, never at query time, and the model
    /// never substitutes zero or infinity for an absent edge.
    pub fn from_tables(
        stops: Vec<Stop>,
        distances: &HashMap<(String, String), f64>,
        times: &HashMap<(String, String), f64>,
        costs: &HashMap<(String, String), f64>,
        charging_prices: &HashMap<String, f64>,
    ) -> Result<Self, NetworkError> {
        let n = stops.len();
        let mut index = HashMap::with_capacity(n);
        let mut parkings = Vec::new();
        let mut loadings = Vec::new();
        let mut unloadings = Vec::new();
        let mut chargers = Vec::new();

        for (i, stop) in stops.iter().enumerate() {
            let id = StopId(i);
            if index.insert(stop.name().to_owned(), id).is_some() {
                return Err(NetworkError::DuplicateStop(stop.name().to_owned()));
            }
            match stop.kind() {
                StopKind::Parking => parkings.push(id),
                StopKind::Loading => loadings.push(id),
                StopKind::Unloading => unloadings.push(id),
                StopKind::Charger => chargers.push(id),
            }
        }

        if parkings.is_empty() {
            return Err(NetworkError::NoParking);
        }

        let mut model = Self {
            distances: TravelMatrix::new(n),
            times: TravelMatrix::new(n),
            costs: TravelMatrix::new(n),
            charging_prices: vec![0.0; n],
            stops,
            index,
            parkings,
            loadings,
            unloadings,
            chargers,
        };

        model.fill_matrix(EdgeKind::Distance, distances)?;
        model.fill_matrix(EdgeKind::Time, times)?;
        model.fill_matrix(EdgeKind::Cost, costs)?;

        for (name, &price) in charging_prices {
            let id = model.resolve(name)?;
            if model.stops[id.0].kind() != StopKind::Charger {
                return Err(NetworkError::PriceOnNonCharger(name.clone()));
            }
            model.charging_prices[id.0] = price;
        }

        Ok(model)
    }

    fn fill_matrix(
        &mut self,
        kind: EdgeKind,
        table: &HashMap<(String, String), f64>,
    ) -> Result<(), NetworkError> {
        for i in 0..self.stops.len() {
            for j in 0..self.stops.len() {
                let from = self.stops[i].name();
                let to = self.stops[j].name();
                let key = (from.to_owned(), to.to_owned());
                let value = *table.get(&key).ok_or_else(|| NetworkError::MissingEdge {
                    kind,
                    from: from.to_owned(),
                    to: to.to_owned(),
                })?;
                if i == j && value != 0.0 {
                    return Err(NetworkError::NonzeroSelfEdge {
                        kind,
                        stop: from.to_owned(),
                        value,
                    });
                }
                let matrix = match kind {
                    EdgeKind::Distance => &mut self.distances,
                    EdgeKind::Time => &mut self.times,
                    EdgeKind::Cost => &mut self.costs,
                };
                matrix.set(StopId(i), StopId(j), value);
            }
        }
        Ok(())
    }

    /// All stops, in arena order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Number of stops in the model.
    pub fn num_stops(&self) -> usize {
        self.stops.len()
    }

    /// The stop record behind an id.
    pub fn stop(&self, id: StopId) -> &Stop {
        &self.stops[id.0]
    }

    /// The name behind an id.
    pub fn name_of(&self, id: StopId) -> &str {
        self.stops[id.0].name()
    }

    /// Resolves a stop name to its dense id.
    pub fn resolve(&self, name: &str) -> Result<StopId, NetworkError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| NetworkError::UnknownStop(name.to_owned()))
    }

    /// Parking stops, in declaration order.
    pub fn parkings(&self) -> &[StopId] {
        &self.parkings
    }

    /// Loading stops, in declaration order.
    pub fn loadings(&self) -> &[StopId] {
        &self.loadings
    }

    /// Unloading stops, in declaration order.
    pub fn unloadings(&self) -> &[StopId] {
        &self.unloadings
    }

    /// Charger stops, in declaration order.
    pub fn chargers(&self) -> &[StopId] {
        &self.chargers
    }

    /// The base parking stop every route opens and closes at.
    pub fn base_parking(&self) -> StopId {
        // Construction guarantees at least one parking.
        self.parkings[0]
    }

    /// Travel distance (km) for the ordered pair `(from, to)`.
    pub fn distance(&self, from: StopId, to: StopId) -> f64 {
        self.distances.get(from, to)
    }

    /// Travel time (minutes) for the ordered pair `(from, to)`.
    pub fn time(&self, from: StopId, to: StopId) -> f64 {
        self.times.get(from, to)
    }

    /// Travel cost for the ordered pair `(from, to)`.
    pub fn cost(&self, from: StopId, to: StopId) -> f64 {
        self.costs.get(from, to)
    }

    /// Name-based distance lookup for boundary callers.
    pub fn distance_between(&self, from: &str, to: &str) -> Result<f64, NetworkError> {
        Ok(self.distance(self.resolve(from)?, self.resolve(to)?))
    }

    /// Name-based time lookup for boundary callers.
    pub fn time_between(&self, from: &str, to: &str) -> Result<f64, NetworkError> {
        Ok(self.time(self.resolve(from)?, self.resolve(to)?))
    }

    /// Name-based cost lookup for boundary callers.
    pub fn cost_between(&self, from: &str, to: &str) -> Result<f64, NetworkError> {
        Ok(self.cost(self.resolve(from)?, self.resolve(to)?))
    }

    /// The stop's kind.
    pub fn kind_of(&self, id: StopId) -> StopKind {
        self.stops[id.0].kind()
    }

    /// Returns `true` if the stop has the given kind.
    pub fn is_kind(&self, id: StopId, kind: StopKind) -> bool {
        self.stops[id.0].kind() == kind
    }

    /// Energy price charged when departing this stop: the stored price for
    /// chargers, zero for every other stop.
    pub fn charging_cost(&self, id: StopId) -> f64 {
        self.charging_prices[id.0]
    }

    /// The distance matrix, for symmetry probes and external consumers.
    pub fn distance_matrix(&self) -> &TravelMatrix {
        &self.distances
    }

    /// The time matrix.
    pub fn time_matrix(&self) -> &TravelMatrix {
        &self.times
    }

    /// The cost matrix.
    pub fn cost_matrix(&self) -> &TravelMatrix {
        &self.costs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{model, scenario_model};

    #[test]
    fn test_scenario_lists_by_kind() {
        let m = scenario_model();
        assert_eq!(m.num_stops(), 5);
        assert_eq!(m.parkings().len(), 1);
        assert_eq!(m.loadings().len(), 2);
        assert_eq!(m.unloadings().len(), 1);
        assert_eq!(m.chargers().len(), 1);
        assert_eq!(m.name_of(m.base_parking()), "P");
    }

    #[test]
    fn test_lookups() {
        let m = scenario_model();
        let p = m.resolve("P").expect("known");
        let l1 = m.resolve("L1").expect("known");
        assert!((m.distance(p, l1) - 5.0).abs() < 1e-10);
        assert!((m.distance(l1, p) - 5.0).abs() < 1e-10);
        assert!((m.time(p, l1) - 10.0).abs() < 1e-10);
        assert!((m.cost(p, l1) - 5.0).abs() < 1e-10);
        assert_eq!(m.distance(p, p), 0.0);
    }

    #[test]
    fn test_symmetry_of_all_matrices() {
        let m = scenario_model();
        assert!(m.distance_matrix().is_symmetric(1e-10));
        assert!(m.time_matrix().is_symmetric(1e-10));
        assert!(m.cost_matrix().is_symmetric(1e-10));
    }

    #[test]
    fn test_charging_cost() {
        let m = scenario_model();
        let c = m.resolve("C").expect("known");
        let l1 = m.resolve("L1").expect("known");
        assert!((m.charging_cost(c) - 10.0).abs() < 1e-10);
        assert_eq!(m.charging_cost(l1), 0.0);
    }

    #[test]
    fn test_kind_queries() {
        let m = scenario_model();
        let c = m.resolve("C").expect("known");
        assert!(m.is_kind(c, StopKind::Charger));
        assert!(!m.is_kind(c, StopKind::Parking));
        assert_eq!(m.kind_of(c), StopKind::Charger);
    }

    #[test]
    fn test_unknown_stop() {
        let m = scenario_model();
        assert!(matches!(
            m.resolve("nowhere"),
            Err(NetworkError::UnknownStop(name)) if name == "nowhere"
        ));
        assert!(m.distance_between("P", "nowhere").is_err());
    }

    #[test]
    fn test_name_based_lookups() {
        let m = scenario_model();
        assert!((m.distance_between("L1", "L2").expect("known") - 3.0).abs() < 1e-10);
        assert!((m.time_between("L1", "L2").expect("known") - 6.0).abs() < 1e-10);
        assert!((m.cost_between("L1", "L2").expect("known") - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_missing_edge_is_construction_error() {
        let stops = &[("A", StopKind::Parking), ("B", StopKind::Loading)];
        // No A-B edge supplied.
        let err = model(stops, &[], &[]).expect_err("must fail");
        assert!(matches!(
            err,
            NetworkError::MissingEdge {
                kind: EdgeKind::Distance,
                ..
            }
        ));
    }

    #[test]
    fn test_nonzero_self_edge_is_construction_error() {
        use std::collections::HashMap;

        let stops = vec![Stop::new("A", StopKind::Parking)];
        let table = HashMap::from([(("A".to_owned(), "A".to_owned()), 3.0)]);
        let err = NetworkModel::from_tables(stops, &table, &table, &table, &HashMap::new())
            .expect_err("must fail");
        assert!(matches!(
            err,
            NetworkError::NonzeroSelfEdge {
                kind: EdgeKind::Distance,
                value,
                ..
            } if value == 3.0
        ));
    }

    #[test]
    fn test_no_parking_is_construction_error() {
        let stops = &[("A", StopKind::Loading), ("B", StopKind::Unloading)];
        let err = model(stops, &[("A", "B", 1.0)], &[]).expect_err("must fail");
        assert!(matches!(err, NetworkError::NoParking));
    }

    #[test]
    fn test_duplicate_stop_is_construction_error() {
        let stops = &[("A", StopKind::Parking), ("A", StopKind::Loading)];
        let err = model(stops, &[], &[]).expect_err("must fail");
        assert!(matches!(err, NetworkError::DuplicateStop(name) if name == "A"));
    }

    #[test]
    fn test_price_on_non_charger_is_construction_error() {
        let stops = &[("A", StopKind::Parking), ("B", StopKind::Loading)];
        let err = model(stops, &[("A", "B", 1.0)], &[("B", 5.0)]).expect_err("must fail");
        assert!(matches!(err, NetworkError::PriceOnNonCharger(name) if name == "B"));
    }

    #[test]
    fn test_unpriced_charger_charges_nothing() {
        let stops = &[
            ("A", StopKind::Parking),
            ("B", StopKind::Loading),
            ("C", StopKind::Charger),
        ];
        let m = model(stops, &[("A", "B", 1.0), ("A", "C", 2.0), ("B", "C", 2.0)], &[])
            .expect("valid");
        let c = m.resolve("C").expect("known");
        assert_eq!(m.charging_cost(c), 0.0);
    }
}
