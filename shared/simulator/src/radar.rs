//! Radar sweep geometry.

use nalgebra::Point2;
use rumble_api::math::normalize_absolute;

/// Absolute bearing in degrees (clockwise from north) from `from` to `to`.
pub fn absolute_bearing(from: Point2<f64>, to: Point2<f64>) -> f64 {
    let d = to - from;
    normalize_absolute(d.x.atan2(d.y).to_degrees())
}

/// Distance between two positions.
pub fn range(from: Point2<f64>, to: Point2<f64>) -> f64 {
    nalgebra::distance(&from, &to)
}

/// Returns true if the absolute bearing `bearing` lies within the arc swept
/// from `start` by `extent` degrees (clockwise for positive extents,
/// counter-clockwise for negative). A zero extent only sees along the
/// boresight.
pub fn in_sweep(start: f64, extent: f64, bearing: f64) -> bool {
    if extent.abs() >= 360.0 {
        return true;
    }
    if extent >= 0.0 {
        normalize_absolute(bearing - start) <= extent
    } else {
        normalize_absolute(start - bearing) <= -extent
    }
}
