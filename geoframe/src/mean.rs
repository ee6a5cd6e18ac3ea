//! Geographic mean of a set of geometries.
//!
//! Averaging longitude and latitude values directly breaks near the antimeridian (the mean of 179° and -179° is 0°)
//! and near the poles. Instead every coordinate is turned into a unit vector on the authalic sphere, the vectors
//! are summed and the direction of the sum is converted back to latitude and longitude.

use geo_types::{Coord, Geometry, LineString, Point, Polygon};
use geoframe_types::geo::impls::GeoPoint2d;
use geoframe_types::geo::{Datum, GeoPoint, NewGeoPoint};
use geoframe_types::Geo;
use nalgebra::Vector3;

use crate::error::{GeoframeError, Result};

/// Relative length of the summed unit vectors below which the mean direction is considered undefined.
const MIN_RESULTANT: f64 = 1e-12;

/// Source of geographic coordinates for the mean computation.
///
/// Points contribute themselves, line strings all their vertices and polygons the vertices of their exterior ring.
/// Implemented for geographic geometries and for slices and vectors of them, so a single geometry and a list of
/// geometries can be passed interchangeably.
pub trait CoordinateSource {
    /// Appends the coordinates of the geometry to `coords`.
    fn collect_coords(&self, coords: &mut Vec<Coord<f64>>) -> Result<()>;
}

impl CoordinateSource for GeoPoint2d {
    fn collect_coords(&self, coords: &mut Vec<Coord<f64>>) -> Result<()> {
        coords.push((*self).into());
        Ok(())
    }
}

impl CoordinateSource for Geo<Point<f64>> {
    fn collect_coords(&self, coords: &mut Vec<Coord<f64>>) -> Result<()> {
        coords.push(self.inner().0);
        Ok(())
    }
}

impl CoordinateSource for Geo<LineString<f64>> {
    fn collect_coords(&self, coords: &mut Vec<Coord<f64>>) -> Result<()> {
        coords.extend(self.inner().coords().copied());
        Ok(())
    }
}

impl CoordinateSource for Geo<Polygon<f64>> {
    fn collect_coords(&self, coords: &mut Vec<Coord<f64>>) -> Result<()> {
        coords.extend(self.inner().exterior().coords().copied());
        Ok(())
    }
}

impl CoordinateSource for Geo<Geometry<f64>> {
    fn collect_coords(&self, coords: &mut Vec<Coord<f64>>) -> Result<()> {
        match self.inner() {
            Geometry::Point(p) => coords.push(p.0),
            Geometry::LineString(l) => coords.extend(l.coords().copied()),
            Geometry::Polygon(p) => coords.extend(p.exterior().coords().copied()),
            other => return Err(GeoframeError::UnsupportedGeometry(geometry_kind(other))),
        }

        Ok(())
    }
}

impl<T: CoordinateSource> CoordinateSource for [T] {
    fn collect_coords(&self, coords: &mut Vec<Coord<f64>>) -> Result<()> {
        self.iter().try_for_each(|geom| geom.collect_coords(coords))
    }
}

impl<T: CoordinateSource> CoordinateSource for Vec<T> {
    fn collect_coords(&self, coords: &mut Vec<Coord<f64>>) -> Result<()> {
        self.as_slice().collect_coords(coords)
    }
}

impl<T: CoordinateSource + ?Sized> CoordinateSource for &T {
    fn collect_coords(&self, coords: &mut Vec<Coord<f64>>) -> Result<()> {
        (**self).collect_coords(coords)
    }
}

/// Name of the geometry variant, used in error messages.
pub(crate) fn geometry_kind(geometry: &Geometry<f64>) -> &'static str {
    match geometry {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
    }
}

/// Computes the geographic mean of all coordinates of the `source` on the given datum.
///
/// # Errors
/// * [`GeoframeError::UnsupportedGeometry`] if the source contains something other than points, line strings or
///   polygons.
/// * [`GeoframeError::EmptyInput`] if no coordinates were collected.
/// * [`GeoframeError::InvalidGeometry`] if a coordinate is not finite.
/// * [`GeoframeError::Degenerate`] if the coordinates cancel each other out (e.g. two antipodal points), so that the
///   mean direction is undefined.
pub fn geographic_mean<S>(source: &S, datum: &Datum) -> Result<GeoPoint2d>
where
    S: CoordinateSource + ?Sized,
{
    let mut coords = Vec::new();
    source.collect_coords(&mut coords)?;

    if coords.is_empty() {
        return Err(GeoframeError::EmptyInput);
    }

    if let Some(c) = coords.iter().find(|c| !c.x.is_finite() || !c.y.is_finite()) {
        return Err(GeoframeError::InvalidGeometry(format!(
            "coordinate ({}, {}) is not finite",
            c.x, c.y
        )));
    }

    let sum = coords
        .iter()
        .map(|c| {
            let lat = datum.authalic_latitude(c.y.to_radians());
            let lon = c.x.to_radians();
            Vector3::new(lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin())
        })
        .fold(Vector3::zeros(), |acc, v| acc + v);

    if sum.norm() < MIN_RESULTANT * coords.len() as f64 {
        return Err(GeoframeError::Degenerate(format!(
            "geographic mean of {} coordinates is undefined, the coordinates cancel each other out",
            coords.len()
        )));
    }

    let lon = sum.y.atan2(sum.x);
    let authalic = sum.z.atan2(sum.x.hypot(sum.y));
    let lat = datum.geodetic_latitude(authalic);

    let mean = GeoPoint2d::latlon(lat.to_degrees(), lon.to_degrees());
    log::trace!(
        "Geographic mean of {} coordinates: ({:.6}, {:.6})",
        coords.len(),
        mean.lat(),
        mean.lon()
    );

    Ok(mean)
}
