//! Projection of east/north vector fields onto swath directions
//!
//! Velocities or slopes delivered on a swath in geographic components are
//! often easier to read along and across the ground track. The projection is
//! a per-cell dot product with the swath unit vectors.

use ndarray::{Array2, ArrayView2};

use super::SwathUnitVectors;
use crate::grid::check_same_shape;
use crate::Result;

/// A vector field split into along-track and cross-track components
#[derive(Debug, Clone, PartialEq)]
pub struct AlongCross {
    pub along: Array2<f64>,
    pub cross: Array2<f64>,
}

impl SwathUnitVectors {
    /// Project an (east, north) field onto the along/cross-track directions
    ///
    /// `along = east * uea + north * una` and
    /// `cross = east * uec + north * unc`. Both inputs must have the swath
    /// shape.
    pub fn project(&self, east: ArrayView2<f64>, north: ArrayView2<f64>) -> Result<AlongCross> {
        check_same_shape(self.shape(), east.dim())?;
        check_same_shape(self.shape(), north.dim())?;

        let along = &east * &self.uea + &north * &self.una;
        let cross = &east * &self.uec + &north * &self.unc;

        Ok(AlongCross { along, cross })
    }
}
