// Library exports for percolation
pub mod error;
pub mod grid;
pub mod monte_carlo;
pub mod stats;
pub mod union_find;

pub use error::PercolationError;
pub use grid::Percolation;
pub use monte_carlo::{run_trial, PercolationStats, SimulationConfig};
pub use union_find::UnionFind;
