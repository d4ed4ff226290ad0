//! Stop and stop-kind types.

use serde::{Deserialize, Serialize};

/// The role a stop plays in the delivery network.
///
/// The set of roles is closed so that the feasibility checker and the
/// 2-opt rejection rule can match exhaustively.
///
/// # Examples
///
/// ```
/// use ev_routing::models::StopKind;
///
/// assert_ne!(StopKind::Loading, StopKind::Unloading);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopKind {
    /// Home base. Every route starts and ends at a parking.
    Parking,
    /// Pickup point. All loadings in a route precede all unloadings.
    Loading,
    /// Drop-off point.
    Unloading,
    /// Energy replenishment point. At most one per route.
    Charger,
}

/// Dense index of a stop within a [`NetworkModel`](crate::network::NetworkModel).
///
/// Ids are minted by the model at construction time and are only meaningful
/// against the model that produced them. Keeping routes as id sequences
/// keeps the nearest-neighbor and 2-opt hot loops allocation-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopId(pub(crate) usize);

impl StopId {
    /// Position of this stop in the model's arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A stop in the delivery network.
///
/// The kind is immutable after creation; the geographic position is
/// optional and only carried through for external map/matrix providers.
///
/// # Examples
///
/// ```
/// use ev_routing::models::{Stop, StopKind};
///
/// let stop = Stop::new("depot", StopKind::Parking).with_position(40.4168, -3.7038);
/// assert_eq!(stop.name(), "depot");
/// assert_eq!(stop.kind(), StopKind::Parking);
/// assert!(stop.position().is_some());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stop {
    name: String,
    kind: StopKind,
    position: Option<(f64, f64)>,
}

impl Stop {
    /// Creates a stop with the given unique name and kind.
    pub fn new(name: impl Into<String>, kind: StopKind) -> Self {
        Self {
            name: name.into(),
            kind,
            position: None,
        }
    }

    /// Sets the geographic position (latitude, longitude).
    pub fn with_position(mut self, lat: f64, lon: f64) -> Self {
        self.position = Some((lat, lon));
        self
    }

    /// Unique stop name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The stop's role in the network.
    pub fn kind(&self) -> StopKind {
        self.kind
    }

    /// Geographic position, if known.
    pub fn position(&self) -> Option<(f64, f64)> {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_new() {
        let s = Stop::new("L1", StopKind::Loading);
        assert_eq!(s.name(), "L1");
        assert_eq!(s.kind(), StopKind::Loading);
        assert!(s.position().is_none());
    }

    #[test]
    fn test_stop_with_position() {
        let s = Stop::new("C1", StopKind::Charger).with_position(41.0, 2.0);
        assert_eq!(s.position(), Some((41.0, 2.0)));
    }

    #[test]
    fn test_stop_id_ordering() {
        assert!(StopId(0) < StopId(3));
        assert_eq!(StopId(2).index(), 2);
    }

    #[test]
    fn test_kind_serde_round_trip() {
        let json = serde_json::to_string(&StopKind::Unloading).expect("serialize");
        assert_eq!(json, "\"unloading\"");
        let kind: StopKind = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(kind, StopKind::Unloading);
    }
}
