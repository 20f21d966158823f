//! # Finite-difference gradients
//!
//! Discrete derivative of a 2D field along one axis with unit sample spacing,
//! following the boundary policy of `numpy.gradient`:
//!
//! - interior cells use the centered difference `(f[i+1] - f[i-1]) / 2`
//! - edge cells use a one-sided difference whose accuracy is set by
//!   [`EdgeOrder`]
//!
//! ```rust
//! use ndarray::{array, Axis};
//! use swathvec::grid::gradient::{gradient, EdgeOrder};
//!
//! let field = array![[1.0, 2.0, 4.0, 7.0, 11.0]];
//! let d = gradient(field.view(), Axis(1), EdgeOrder::First).unwrap();
//! assert_eq!(d, array![[1.0, 1.5, 2.5, 3.5, 4.0]]);
//! ```

use ndarray::{Array2, ArrayView2, Axis, Zip};
use serde::{Deserialize, Serialize};

use crate::{Result, SwathError};

/// Accuracy order of the one-sided differences used on the first and last
/// sample of an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeOrder {
    /// Forward/backward first differences
    #[default]
    First,
    /// Second-order one-sided differences over three samples
    Second,
}

impl EdgeOrder {
    /// Minimum number of samples an axis needs for this edge order
    pub fn min_samples(self) -> usize {
        match self {
            EdgeOrder::First => 2,
            EdgeOrder::Second => 3,
        }
    }
}

/// Computes the gradient of `field` along `axis` with unit spacing
///
/// # Arguments
///
/// * `field` - 2D input values
/// * `axis` - `Axis(0)` for along-track, `Axis(1)` for cross-track
/// * `edge_order` - Accuracy of the boundary differences
///
/// # Returns
///
/// A new array of the same shape, or [`SwathError::TooFewSamples`] if the
/// axis is shorter than `edge_order.min_samples()`.
pub fn gradient(
    field: ArrayView2<f64>,
    axis: Axis,
    edge_order: EdgeOrder,
) -> Result<Array2<f64>> {
    let len = field.len_of(axis);
    let required = edge_order.min_samples();
    if len < required {
        return Err(SwathError::TooFewSamples {
            axis: axis.index(),
            len,
            required,
        });
    }

    let mut out = Array2::zeros(field.raw_dim());
    Zip::from(out.lanes_mut(axis))
        .and(field.lanes(axis))
        .for_each(|mut d, f| {
            let n = f.len();
            for i in 1..n - 1 {
                d[i] = (f[i + 1] - f[i - 1]) / 2.0;
            }
            match edge_order {
                EdgeOrder::First => {
                    d[0] = f[1] - f[0];
                    d[n - 1] = f[n - 1] - f[n - 2];
                }
                EdgeOrder::Second => {
                    d[0] = (-3.0 * f[0] + 4.0 * f[1] - f[2]) / 2.0;
                    d[n - 1] = (3.0 * f[n - 1] - 4.0 * f[n - 2] + f[n - 3]) / 2.0;
                }
            }
        });

    Ok(out)
}
