//! Swathvec: local direction vectors for SWOT swath grids
//!
//! A SWOT (Surface Water and Ocean Topography) swath is sampled on a 2D grid of
//! longitude/latitude points. Axis 0 runs along the satellite ground track and
//! axis 1 runs across the swath. This crate computes, for every cell, the unit
//! vectors of those two sampling directions in east/north components.
//!
//! ```rust
//! use ndarray::Array2;
//! use swathvec::swath_unit_vectors;
//!
//! // Latitude grows along track, longitude grows across track
//! let lat = Array2::from_shape_fn((3, 3), |(i, _)| 0.01 * i as f64);
//! let lon = Array2::from_shape_fn((3, 3), |(_, j)| 0.01 * j as f64);
//!
//! let vectors = swath_unit_vectors(&lon, &lat).unwrap();
//! assert!((vectors.una[[1, 1]] - 1.0).abs() < 1e-9);
//! assert!((vectors.uec[[1, 1]] - 1.0).abs() < 1e-9);
//! ```

use thiserror::Error;

pub mod constants;
pub mod grid;
pub mod vectors;

// Re-export commonly used types
pub use grid::gradient::{gradient, EdgeOrder};
pub use grid::SwathGrid;
pub use vectors::projection::AlongCross;
pub use vectors::{
    swath_unit_vectors, DegenerateReport, SwathUnitVectors, UnitVectorOptions, UnitVectorSolver,
};

/// Main error type for the swathvec library
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SwathError {
    #[error("Shape mismatch: expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("Axis {axis} has {len} samples, at least {required} are required for a gradient")]
    TooFewSamples {
        axis: usize,
        len: usize,
        required: usize,
    },
}

/// Result type for swathvec operations
pub type Result<T> = std::result::Result<T, SwathError>;
