//! Shared fixtures for unit and property tests.

use std::collections::HashMap;

use crate::models::{Stop, StopKind};
use crate::network::{NetworkError, NetworkModel};

/// Builds a model from undirected edge weights.
///
/// Each `(a, b, km)` entry is mirrored in both directions; self-pairs are
/// filled with zero; travel time is `2 * km` and travel cost equals `km`.
pub(crate) fn model(
    stops: &[(&str, StopKind)],
    edges: &[(&str, &str, f64)],
    prices: &[(&str, f64)],
) -> Result<NetworkModel, NetworkError> {
    let mut distances = HashMap::new();
    let mut times = HashMap::new();
    let mut costs = HashMap::new();

    for &(a, b, km) in edges {
        for (x, y) in [(a, b), (b, a)] {
            distances.insert((x.to_owned(), y.to_owned()), km);
            times.insert((x.to_owned(), y.to_owned()), km * 2.0);
            costs.insert((x.to_owned(), y.to_owned()), km);
        }
    }
    for &(name, _) in stops {
        distances.insert((name.to_owned(), name.to_owned()), 0.0);
        times.insert((name.to_owned(), name.to_owned()), 0.0);
        costs.insert((name.to_owned(), name.to_owned()), 0.0);
    }

    let charging_prices: HashMap<String, f64> = prices
        .iter()
        .map(|&(name, price)| (name.to_owned(), price))
        .collect();

    let stops: Vec<Stop> = stops
        .iter()
        .map(|&(name, kind)| Stop::new(name, kind))
        .collect();

    NetworkModel::from_tables(stops, &distances, &times, &costs, &charging_prices)
}

/// The worked example: parking `P`, loadings `L1`/`L2`, unloading `U1`,
/// charger `C` priced at 10, with every stop two km from the charger.
pub(crate) fn scenario_model() -> NetworkModel {
    model(
        &[
            ("P", StopKind::Parking),
            ("L1", StopKind::Loading),
            ("L2", StopKind::Loading),
            ("U1", StopKind::Unloading),
            ("C", StopKind::Charger),
        ],
        &[
            ("P", "L1", 5.0),
            ("P", "L2", 8.0),
            ("P", "U1", 5.0),
            ("P", "C", 2.0),
            ("L1", "L2", 3.0),
            ("L1", "U1", 4.0),
            ("L1", "C", 2.0),
            ("L2", "U1", 6.0),
            ("L2", "C", 2.0),
            ("U1", "C", 2.0),
        ],
        &[("C", 10.0)],
    )
    .expect("scenario model is valid")
}
