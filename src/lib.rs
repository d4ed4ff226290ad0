//! # ev-routing
//!
//! Delivery tour planning for a small fleet of range-limited electric
//! vehicles. Tours visit typed stops — a parking base, loading and
//! unloading points, charging stations — while minimizing travel distance
//! and respecting the operational ordering rules: every route is anchored
//! at a parking, all loadings precede all unloadings, and each route
//! carries at most one charger, inserted at minimum detour cost.
//!
//! ## Modules
//!
//! - [`models`] — Stops, routes, and the solution aggregate
//! - [`network`] — Immutable network model with dense travel matrices
//! - [`evaluation`] — Route and solution feasibility checking
//! - [`constructive`] — Nearest-neighbor construction with charger insertion
//! - [`local_search`] — Constrained 2-opt improvement
//! - [`exact`] — Contract for an external MILP-based exact solver
//!
//! ## Example
//!
//! ```
//! use std::collections::HashMap;
//! use ev_routing::constructive::nearest_neighbor;
//! use ev_routing::local_search::two_opt;
//! use ev_routing::models::{Stop, StopKind};
//! use ev_routing::network::NetworkModel;
//!
//! let stops = vec![
//!     Stop::new("base", StopKind::Parking),
//!     Stop::new("farm", StopKind::Loading),
//!     Stop::new("market", StopKind::Unloading),
//!     Stop::new("station", StopKind::Charger),
//! ];
//!
//! let mut distances = HashMap::new();
//! for (a, b, km) in [
//!     ("base", "farm", 6.0),
//!     ("base", "market", 5.0),
//!     ("base", "station", 2.0),
//!     ("farm", "market", 4.0),
//!     ("farm", "station", 3.0),
//!     ("market", "station", 3.0),
//! ] {
//!     distances.insert((a.to_owned(), b.to_owned()), km);
//!     distances.insert((b.to_owned(), a.to_owned()), km);
//! }
//! for name in ["base", "farm", "market", "station"] {
//!     distances.insert((name.to_owned(), name.to_owned()), 0.0);
//! }
//! let prices = HashMap::from([("station".to_owned(), 12.0)]);
//!
//! let model = NetworkModel::from_tables(
//!     stops, &distances, &distances, &distances, &prices,
//! )?;
//!
//! let initial = nearest_neighbor(&model);
//! let improved = two_opt(&model, &initial);
//!
//! assert_eq!(improved.complete_feasible(), Some(true));
//! assert!(improved.total_distance() <= initial.total_distance());
//! # Ok::<(), ev_routing::network::NetworkError>(())
//! ```

pub mod constructive;
pub mod evaluation;
pub mod exact;
pub mod local_search;
pub mod models;
pub mod network;

#[cfg(test)]
pub(crate) mod test_fixtures;
