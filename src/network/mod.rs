//! Network model: stops, travel matrices, charging prices.

mod matrix;
mod model;

pub use matrix::TravelMatrix;
pub use model::{EdgeKind, NetworkError, NetworkModel};
