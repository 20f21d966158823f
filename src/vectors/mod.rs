//! # Swath unit vectors
//!
//! For each cell of a swath grid this module computes the local unit vector
//! of the along-track direction (axis 0) and of the cross-track direction
//! (axis 1), both in east/north components.
//!
//! ## Method
//!
//! Latitude and longitude are differentiated along each grid axis with
//! [`gradient`](crate::grid::gradient::gradient). Longitude gradients are
//! multiplied by `cos(lat)` so that east and north displacements share a
//! length scale, then each (east, north) pair is divided by its magnitude.
//!
//! Cells where neighbouring samples coincide have zero magnitude. Those
//! cells come out as `NaN` (or `±inf`) following IEEE division rules; they
//! are counted by [`SwathUnitVectors::degenerate_cells`] but never altered.

pub mod projection;

use nalgebra::Vector2;
use ndarray::{Array2, ArrayView2, Axis, Zip};
use serde::{Deserialize, Serialize};

use crate::constants::{DEG360, RAD2DEG};
use crate::grid::gradient::{gradient, EdgeOrder};
use crate::grid::{check_same_shape, cos_lat, SwathGrid};
use crate::Result;

/// Tunable parts of the unit vector computation
///
/// The default matches `numpy.gradient` defaults: first-order one-sided
/// differences on the grid edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitVectorOptions {
    /// Accuracy of the finite differences on the first/last row and column
    pub edge_order: EdgeOrder,
}

/// Direction unit vectors for every cell of a swath
///
/// All four arrays share the shape of the input grid.
#[derive(Debug, Clone, PartialEq)]
pub struct SwathUnitVectors {
    /// East component of the along-track unit vector
    pub uea: Array2<f64>,
    /// North component of the along-track unit vector
    pub una: Array2<f64>,
    /// East component of the cross-track unit vector
    pub uec: Array2<f64>,
    /// North component of the cross-track unit vector
    pub unc: Array2<f64>,
}

/// Count of cells with a non-finite unit vector component
///
/// Zero magnitudes give `NaN` or `±inf` components and are counted. A
/// magnitude that overflows to infinity gives zero components and is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegenerateReport {
    /// Number of cells in the grid
    pub total_cells: usize,
    /// Cells with a non-finite along-track component
    pub along_track: usize,
    /// Cells with a non-finite cross-track component
    pub cross_track: usize,
}

impl DegenerateReport {
    /// True when every cell has finite directions
    pub fn is_clean(&self) -> bool {
        self.along_track == 0 && self.cross_track == 0
    }
}

/// Computes [`SwathUnitVectors`] with a fixed set of options
#[derive(Debug, Clone, Default)]
pub struct UnitVectorSolver {
    options: UnitVectorOptions,
}

impl UnitVectorSolver {
    /// Create a solver with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all options
    pub fn with_options(mut self, options: UnitVectorOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the edge difference order
    pub fn with_edge_order(mut self, edge_order: EdgeOrder) -> Self {
        self.options.edge_order = edge_order;
        self
    }

    pub fn options(&self) -> &UnitVectorOptions {
        &self.options
    }

    /// Compute unit vectors for a validated grid
    pub fn solve(&self, grid: &SwathGrid) -> Result<SwathUnitVectors> {
        self.solve_views(grid.lon(), grid.lat())
    }

    /// Compute unit vectors from borrowed longitude/latitude arrays (degrees)
    ///
    /// The arguments follow the `(lon, lat)` order. Shapes must match.
    pub fn solve_views(
        &self,
        lon: ArrayView2<f64>,
        lat: ArrayView2<f64>,
    ) -> Result<SwathUnitVectors> {
        check_same_shape(lon.dim(), lat.dim())?;
        let (na, nc) = lon.dim();
        let edge_order = self.options.edge_order;
        log::debug!(
            "Computing swath unit vectors on {}x{} grid ({:?} order edges)",
            na,
            nc,
            edge_order
        );

        let cost = cos_lat(lat);

        let dna = gradient(lat, Axis(0), edge_order)?;
        let dnc = gradient(lat, Axis(1), edge_order)?;
        let dea = gradient(lon, Axis(0), edge_order)? * &cost;
        let dec = gradient(lon, Axis(1), edge_order)? * &cost;

        let (uea, una) = normalize(dea, dna);
        let (uec, unc) = normalize(dec, dnc);

        let vectors = SwathUnitVectors { uea, una, uec, unc };

        let report = vectors.degenerate_cells();
        if !report.is_clean() {
            log::warn!(
                "{} along-track and {} cross-track cells of {} have zero-length gradients",
                report.along_track,
                report.cross_track,
                report.total_cells
            );
        }

        Ok(vectors)
    }
}

/// Compute swath unit vectors with default options
///
/// # Arguments
///
/// * `lon` - Longitude in degrees, shape `(na, nc)`
/// * `lat` - Latitude in degrees, same shape
///
/// # Returns
///
/// The along-track `(uea, una)` and cross-track `(uec, unc)` components, or
/// an error when the shapes differ or an axis has fewer than two samples.
pub fn swath_unit_vectors(lon: &Array2<f64>, lat: &Array2<f64>) -> Result<SwathUnitVectors> {
    UnitVectorSolver::new().solve_views(lon.view(), lat.view())
}

/// Divide each (east, north) pair by its length, in place
fn normalize(mut east: Array2<f64>, mut north: Array2<f64>) -> (Array2<f64>, Array2<f64>) {
    Zip::from(&mut east).and(&mut north).for_each(|e, n| {
        let ds = (*e * *e + *n * *n).sqrt();
        *e /= ds;
        *n /= ds;
    });
    (east, north)
}

/// Azimuth of an (east, north) direction in degrees clockwise from north, in `[0, 360)`
fn azimuth_deg(east: f64, north: f64) -> f64 {
    let az = (east.atan2(north) * RAD2DEG).rem_euclid(DEG360);
    if az >= DEG360 {
        0.0
    } else {
        az
    }
}

impl SwathUnitVectors {
    /// Shape shared by all four component arrays
    pub fn shape(&self) -> (usize, usize) {
        self.uea.dim()
    }

    /// Split into `(uea, una, uec, unc)`
    pub fn into_parts(self) -> (Array2<f64>, Array2<f64>, Array2<f64>, Array2<f64>) {
        (self.uea, self.una, self.uec, self.unc)
    }

    /// Along-track direction at one cell as `(east, north)`
    pub fn along_track_at(&self, row: usize, col: usize) -> Option<Vector2<f64>> {
        let e = self.uea.get((row, col))?;
        let n = self.una.get((row, col))?;
        Some(Vector2::new(*e, *n))
    }

    /// Cross-track direction at one cell as `(east, north)`
    pub fn cross_track_at(&self, row: usize, col: usize) -> Option<Vector2<f64>> {
        let e = self.uec.get((row, col))?;
        let n = self.unc.get((row, col))?;
        Some(Vector2::new(*e, *n))
    }

    /// Heading of the ground track in degrees clockwise from north
    pub fn along_track_heading(&self) -> Array2<f64> {
        Zip::from(&self.uea)
            .and(&self.una)
            .map_collect(|&e, &n| azimuth_deg(e, n))
    }

    /// Heading of the cross-track direction in degrees clockwise from north
    pub fn cross_track_heading(&self) -> Array2<f64> {
        Zip::from(&self.uec)
            .and(&self.unc)
            .map_collect(|&e, &n| azimuth_deg(e, n))
    }

    /// Angle in degrees between the along-track and cross-track directions
    pub fn intersection_angle(&self) -> Array2<f64> {
        Zip::from(&self.uea)
            .and(&self.una)
            .and(&self.uec)
            .and(&self.unc)
            .map_collect(|&ea, &na, &ec, &nc| {
                let along = Vector2::new(ea, na);
                let cross = Vector2::new(ec, nc);
                along.dot(&cross).clamp(-1.0, 1.0).acos() * RAD2DEG
            })
    }

    /// Count cells whose components are not finite
    pub fn degenerate_cells(&self) -> DegenerateReport {
        let along_track = Zip::from(&self.uea)
            .and(&self.una)
            .fold(0usize, |acc, e, n| acc + usize::from(!(e.is_finite() && n.is_finite())));
        let cross_track = Zip::from(&self.uec)
            .and(&self.unc)
            .fold(0usize, |acc, e, n| acc + usize::from(!(e.is_finite() && n.is_finite())));

        DegenerateReport {
            total_cells: self.uea.len(),
            along_track,
            cross_track,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    fn regular_grid(lat0: f64) -> (Array2<f64>, Array2<f64>) {
        let lat = Array2::from_shape_fn((3, 3), |(i, _)| lat0 + 0.01 * i as f64);
        let lon = Array2::from_shape_fn((3, 3), |(_, j)| 0.01 * j as f64);
        (lon, lat)
    }

    #[test]
    fn test_equator_grid_directions() {
        let (lon, lat) = regular_grid(0.0);
        let v = swath_unit_vectors(&lon, &lat).unwrap();

        for ((e, n), (ce, cn)) in v
            .uea
            .iter()
            .zip(v.una.iter())
            .zip(v.uec.iter().zip(v.unc.iter()))
        {
            assert_relative_eq!(*e, 0.0, epsilon = 1e-12);
            assert_relative_eq!(*n, 1.0, epsilon = 1e-12);
            assert_relative_eq!(*ce, 1.0, epsilon = 1e-12);
            assert_relative_eq!(*cn, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_normalize_zero_length_is_nan() {
        let (e, n) = normalize(array![[0.0, 3.0]], array![[0.0, 4.0]]);
        assert!(e[[0, 0]].is_nan());
        assert!(n[[0, 0]].is_nan());
        assert_relative_eq!(e[[0, 1]], 0.6);
        assert_relative_eq!(n[[0, 1]], 0.8);
    }

    #[test]
    fn test_azimuth() {
        assert_relative_eq!(azimuth_deg(0.0, 1.0), 0.0);
        assert_relative_eq!(azimuth_deg(1.0, 0.0), 90.0);
        assert_relative_eq!(azimuth_deg(0.0, -1.0), 180.0);
        assert_relative_eq!(azimuth_deg(-1.0, 0.0), 270.0);
        assert!(azimuth_deg(-1e-300, 1.0) < DEG360);
        assert!(azimuth_deg(f64::NAN, 1.0).is_nan());
    }

    #[test]
    fn test_cell_accessors() {
        let (lon, lat) = regular_grid(0.0);
        let v = swath_unit_vectors(&lon, &lat).unwrap();

        let along = v.along_track_at(2, 2).unwrap();
        assert_relative_eq!(along.norm(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(along.y, 1.0, epsilon = 1e-12);

        let cross = v.cross_track_at(0, 1).unwrap();
        assert_relative_eq!(cross.x, 1.0, epsilon = 1e-12);

        assert!(v.along_track_at(3, 0).is_none());
        assert!(v.cross_track_at(0, 3).is_none());
    }

    #[test]
    fn test_headings_and_intersection() {
        let (lon, lat) = regular_grid(0.0);
        let v = swath_unit_vectors(&lon, &lat).unwrap();

        for h in v.along_track_heading().iter() {
            assert!(h.abs() < 1e-9 || (h - DEG360).abs() < 1e-9);
        }
        for h in v.cross_track_heading().iter() {
            assert_relative_eq!(*h, 90.0, epsilon = 1e-9);
        }
        for a in v.intersection_angle().iter() {
            assert_relative_eq!(*a, 90.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_degenerate_report() {
        let lon = Array2::from_elem((3, 4), 10.0);
        let lat = Array2::from_elem((3, 4), -20.0);
        let v = swath_unit_vectors(&lon, &lat).unwrap();

        let report = v.degenerate_cells();
        assert_eq!(
            report,
            DegenerateReport {
                total_cells: 12,
                along_track: 12,
                cross_track: 12
            }
        );
        assert!(!report.is_clean());

        let (lon, lat) = regular_grid(45.0);
        assert!(swath_unit_vectors(&lon, &lat)
            .unwrap()
            .degenerate_cells()
            .is_clean());
    }

    #[test]
    fn test_overflowing_magnitude_is_not_degenerate() {
        // d(lat)^2 overflows, so the along-track magnitude is infinite
        let lat = Array2::from_shape_fn((3, 3), |(i, _)| 1e200 * i as f64);
        let lon = Array2::from_shape_fn((3, 3), |(_, j)| j as f64);
        let v = swath_unit_vectors(&lon, &lat).unwrap();

        assert!(v.una.iter().all(|&n| n == 0.0));
        assert!(v.uea.iter().all(|&e| e == 0.0));
        assert!(v.degenerate_cells().is_clean());
    }

    #[test]
    fn test_solver_builder() {
        let solver = UnitVectorSolver::new().with_edge_order(EdgeOrder::Second);
        assert_eq!(solver.options().edge_order, EdgeOrder::Second);

        let solver = solver.with_options(UnitVectorOptions::default());
        assert_eq!(solver.options().edge_order, EdgeOrder::First);
    }

    #[test]
    fn test_options_deserialize() {
        let options: UnitVectorOptions = serde_json::from_str(r#"{"edge_order":"second"}"#).unwrap();
        assert_eq!(options.edge_order, EdgeOrder::Second);

        let options: UnitVectorOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, UnitVectorOptions::default());
    }

    #[test]
    fn test_second_order_needs_three_samples() {
        let lon = Array2::from_shape_fn((2, 5), |(_, j)| j as f64);
        let lat = Array2::from_shape_fn((2, 5), |(i, _)| i as f64);

        assert!(UnitVectorSolver::new()
            .solve_views(lon.view(), lat.view())
            .is_ok());
        assert!(UnitVectorSolver::new()
            .with_edge_order(EdgeOrder::Second)
            .solve_views(lon.view(), lat.view())
            .is_err());
    }
}
