//! Mathematical utilities: parameter covariance and sample grids.

pub mod covariance;
pub mod grid;

pub use covariance::*;
pub use grid::*;
