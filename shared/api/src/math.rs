//! Degree arithmetic in the arena's angular convention: 0 is north and
//! positive angles are clockwise.

/// Normalizes an absolute heading to [0, 360).
pub fn normalize_absolute(degrees: f64) -> f64 {
    degrees.rem_euclid(360.0)
}

/// Normalizes a relative bearing to (-180, 180].
pub fn normalize_relative(degrees: f64) -> f64 {
    let d = degrees.rem_euclid(360.0);
    if d > 180.0 {
        d - 360.0
    } else {
        d
    }
}
