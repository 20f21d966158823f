//! Constants module for swath geometry calculations

use std::f64::consts::PI;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Degrees in a complete circle
pub const DEG360: f64 = 360.0;

// Tolerances
/// Tolerance used when checking that a direction is unit length
pub const UNIT_NORM_TOLERANCE: f64 = 1e-9;
