use geoframe_types::geo::GeoPoint;

use crate::error::{GeoframeError, Result};

/// Mean radius of the Earth in meters, the default sphere for [`haversine_distance`].
pub const MEAN_EARTH_RADIUS: f64 = 6_371_000.0;

/// Great-circle distance in meters between two points on a sphere of the given `radius` (meters).
///
/// Use [`MEAN_EARTH_RADIUS`] for a spherical approximation of the Earth. For distances on the ellipsoid see
/// [`process_linestring`](crate::process_linestring).
pub fn haversine_distance(
    from: &impl GeoPoint<Num = f64>,
    to: &impl GeoPoint<Num = f64>,
    radius: f64,
) -> Result<f64> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(GeoframeError::InvalidParameter {
            name: "radius",
            reason: format!("must be a finite positive number of meters, got {radius}"),
        });
    }

    let d_lat = to.lat_rad() - from.lat_rad();
    let d_lon = to.lon_rad() - from.lon_rad();

    let a = (d_lat / 2.0).sin().powi(2)
        + from.lat_rad().cos() * to.lat_rad().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().min(1.0).asin();

    Ok(radius * c)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use geo::HaversineDistance;
    use geo_types::point;
    use geoframe_types::latlon;

    use super::*;

    #[test]
    fn quarter_of_meridian() {
        let d = haversine_distance(&latlon!(0.0, 0.0), &latlon!(90.0, 0.0), 1.0).unwrap();
        assert_relative_eq!(d, std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn matches_reference_implementation() {
        let from = latlon!(52.52, 13.405);
        let to = latlon!(48.8566, 2.3522);
        let reference = point!(x: 13.405, y: 52.52).haversine_distance(&point!(x: 2.3522, y: 48.8566));

        let d = haversine_distance(&from, &to, 6_371_008.8).unwrap();
        assert_relative_eq!(d, reference, max_relative = 1e-12);

        let default_sphere = haversine_distance(&from, &to, MEAN_EARTH_RADIUS).unwrap();
        assert!((870_000.0..885_000.0).contains(&default_sphere));
    }

    #[test]
    fn across_antimeridian() {
        let d = haversine_distance(&latlon!(0.0, 179.5), &latlon!(0.0, -179.5), MEAN_EARTH_RADIUS)
            .unwrap();
        assert_relative_eq!(d, MEAN_EARTH_RADIUS * 1f64.to_radians(), max_relative = 1e-12);
    }

    #[test]
    fn rejects_invalid_radius() {
        for radius in [0.0, -1.0, f64::NAN] {
            assert!(haversine_distance(&latlon!(0.0, 0.0), &latlon!(1.0, 1.0), radius).is_err());
        }
    }
}
