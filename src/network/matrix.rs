//! Dense travel matrix.

use crate::models::StopId;

/// A dense n×n matrix of per-edge values stored in row-major order.
///
/// One instance each holds distances (km), travel times (minutes), and
/// travel costs; all three are filled and validated by
/// [`NetworkModel::from_tables`](super::NetworkModel::from_tables), after
/// which lookups are total and O(1).
#[derive(Debug, Clone)]
pub struct TravelMatrix {
    data: Vec<f64>,
    size: usize,
}

impl TravelMatrix {
    /// Creates a matrix of the given size, initialized to zero.
    pub(crate) fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Returns the value for the ordered pair `(from, to)`.
    pub fn get(&self, from: StopId, to: StopId) -> f64 {
        self.data[from.0 * self.size + to.0]
    }

    pub(crate) fn set(&mut self, from: StopId, to: StopId, value: f64) {
        self.data[from.0 * self.size + to.0] = value;
    }

    /// Number of stops covered by this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(StopId(i), StopId(j)) - self.get(StopId(j), StopId(i))).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}
