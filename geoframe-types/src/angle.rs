//! Wrapping of angles (in degrees) into canonical ranges.

/// Wraps an angle in degrees into `[-180, 180]`.
///
/// Values already inside the range are returned unchanged, so both `-180` and `180` are kept as they are.
///
/// ```
/// use geoframe_types::angle::wrap_to_180;
///
/// assert_eq!(wrap_to_180(200.0), -160.0);
/// assert_eq!(wrap_to_180(-200.0), 160.0);
/// assert_eq!(wrap_to_180(180.0), 180.0);
/// ```
pub fn wrap_to_180(angle: f64) -> f64 {
    if (-180.0..=180.0).contains(&angle) {
        angle
    } else {
        (angle + 180.0).rem_euclid(360.0) - 180.0
    }
}

/// Wraps an angle in degrees into `[0, 360)`.
pub fn wrap_to_360(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
