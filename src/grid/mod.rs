//! Swath sampling grids
//!
//! A [`SwathGrid`] pairs the longitude and latitude of every sample in a
//! swath. Rows (axis 0) follow the ground track, columns (axis 1) cross it.

pub mod gradient;

use ndarray::{Array2, ArrayView2};

use self::gradient::EdgeOrder;
use crate::constants::DEG2RAD;
use crate::{Result, SwathError};

/// Longitude/latitude samples of one swath, both in degrees, with identical shape
#[derive(Debug, Clone, PartialEq)]
pub struct SwathGrid {
    lon: Array2<f64>,
    lat: Array2<f64>,
}

impl SwathGrid {
    /// Create a grid from longitude and latitude arrays
    ///
    /// Fails with [`SwathError::ShapeMismatch`] when the two shapes differ.
    /// The mismatch is reported with `lon` as the expected shape. An axis
    /// with fewer than two samples fails with [`SwathError::TooFewSamples`].
    pub fn new(lon: Array2<f64>, lat: Array2<f64>) -> Result<Self> {
        check_same_shape(lon.dim(), lat.dim())?;
        check_min_samples(lon.dim(), EdgeOrder::First)?;
        Ok(Self { lon, lat })
    }

    /// Create a grid by copying borrowed views
    pub fn from_views(lon: ArrayView2<f64>, lat: ArrayView2<f64>) -> Result<Self> {
        check_same_shape(lon.dim(), lat.dim())?;
        check_min_samples(lon.dim(), EdgeOrder::First)?;
        Ok(Self {
            lon: lon.to_owned(),
            lat: lat.to_owned(),
        })
    }

    /// Grid shape as `(na, nc)`
    pub fn shape(&self) -> (usize, usize) {
        self.lon.dim()
    }

    /// Number of along-track samples
    pub fn na(&self) -> usize {
        self.lon.nrows()
    }

    /// Number of cross-track samples
    pub fn nc(&self) -> usize {
        self.lon.ncols()
    }

    pub fn lon(&self) -> ArrayView2<f64> {
        self.lon.view()
    }

    pub fn lat(&self) -> ArrayView2<f64> {
        self.lat.view()
    }

    /// Cosine of latitude at every sample
    ///
    /// A degree of longitude spans `cos(lat)` times the distance of a degree
    /// of latitude, so this factor puts east and north gradients in
    /// comparable units.
    pub fn cos_lat(&self) -> Array2<f64> {
        cos_lat(self.lat.view())
    }

    /// Split the grid back into `(lon, lat)`
    pub fn into_parts(self) -> (Array2<f64>, Array2<f64>) {
        (self.lon, self.lat)
    }
}

pub(crate) fn cos_lat(lat: ArrayView2<f64>) -> Array2<f64> {
    lat.mapv(|lat| (lat * DEG2RAD).cos())
}

pub(crate) fn check_same_shape(expected: (usize, usize), found: (usize, usize)) -> Result<()> {
    if expected != found {
        return Err(SwathError::ShapeMismatch { expected, found });
    }
    Ok(())
}

fn check_min_samples((na, nc): (usize, usize), edge_order: EdgeOrder) -> Result<()> {
    let required = edge_order.min_samples();
    for (axis, len) in [(0, na), (1, nc)] {
        if len < required {
            return Err(SwathError::TooFewSamples {
                axis,
                len,
                required,
            });
        }
    }
    Ok(())
}
