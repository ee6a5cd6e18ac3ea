use approx::AbsDiffEq;
use geo_types::{coord, Coord};
use serde::{Deserialize, Serialize};

use crate::angle::wrap_to_180;
use crate::geo::traits::point::{GeoPoint, NewGeoPoint};
use crate::geometry_type::{GeoSpace2d, GeometryType};

/// 2d point on the surface of the ellipsoid.
///
/// Longitude is normalized into `[-180, 180]` on construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct GeoPoint2d {
    lat: f64,
    lon: f64,
}

impl GeoPoint for GeoPoint2d {
    type Num = f64;

    fn lat(&self) -> f64 {
        self.lat
    }

    fn lon(&self) -> f64 {
        self.lon
    }
}

impl NewGeoPoint<f64> for GeoPoint2d {
    fn latlon(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon: wrap_to_180(lon),
        }
    }
}

impl GeoPoint2d {
    /// Returns true if both coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

impl GeometryType for GeoPoint2d {
    type Space = GeoSpace2d;
}

impl From<Coord<f64>> for GeoPoint2d {
    fn from(value: Coord<f64>) -> Self {
        Self::latlon(value.y, value.x)
    }
}

impl From<GeoPoint2d> for Coord<f64> {
    fn from(value: GeoPoint2d) -> Self {
        coord!(x: value.lon, y: value.lat)
    }
}

impl AbsDiffEq for GeoPoint2d {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.lat.abs_diff_eq(&other.lat, epsilon) && self.lon.abs_diff_eq(&other.lon, epsilon)
    }
}

/// Creates a new GeoPoint2d from latitude and longitude values (in degrees).
///
/// ```
/// use geoframe_types::geo::GeoPoint;
/// use geoframe_types::latlon;
///
/// let point = latlon!(38.0, 52.0);
/// assert_eq!(point.lat(), 38.0);
/// ```
#[macro_export]
macro_rules! latlon {
    ($lat:expr, $lon:expr) => {
        <$crate::geo::impls::GeoPoint2d as $crate::geo::NewGeoPoint<f64>>::latlon($lat, $lon)
    };
}
