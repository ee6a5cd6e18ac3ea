use geo::MapCoords;
use geo_types::Coord;
use geoframe_types::cartesian::{CartesianPoint2d, Point2};
use geoframe_types::error::GeoframeTypesError;
use geoframe_types::geo::impls::{GeoPoint2d, GeodesyProjection};
use geoframe_types::geo::{Crs, GeoPoint, Projection};
use geoframe_types::{Geo, Local};

use crate::error::Result;

/// Pair of mutually consistent conversions between geographic coordinates and a local projected frame.
///
/// A frame is derived from one geometry (see [`Geoframe::local_frame`](crate::Geoframe::local_frame)) and is only
/// accurate in the neighbourhood of that geometry. Reusing it for geometries far away from its
/// [`centroid`](LocalFrame::centroid) gives distorted results. Nothing enforces this, so it is up to the caller.
///
/// Local coordinates are easting and northing in meters. Geographic coordinates returned by the inverse direction
/// have longitude normalized into `[-180, 180]`.
#[derive(Debug)]
pub struct LocalFrame {
    centroid: GeoPoint2d,
    crs: Crs,
    projection: GeodesyProjection<GeoPoint2d, Point2>,
}

impl LocalFrame {
    /// Creates a frame in the given `crs` around the `centroid`.
    pub fn new(centroid: GeoPoint2d, crs: Crs) -> Result<Self> {
        let projection = crs.get_projection()?;
        log::debug!(
            "Local frame for ({:.6}, {:.6}): {crs} ({})",
            centroid.lon(),
            centroid.lat(),
            projection.definition()
        );

        Ok(Self {
            centroid,
            crs,
            projection,
        })
    }

    /// Geographic point the frame was derived from.
    pub fn centroid(&self) -> GeoPoint2d {
        self.centroid
    }

    /// Projected coordinate system of the frame.
    pub fn crs(&self) -> &Crs {
        &self.crs
    }

    /// Converts a geographic point into local coordinates.
    pub fn forward(&self, point: &GeoPoint2d) -> Result<Point2> {
        self.projection.project(point).ok_or_else(|| {
            GeoframeTypesError::Transform {
                x: point.lon(),
                y: point.lat(),
            }
            .into()
        })
    }

    /// Converts a local point back into geographic coordinates.
    pub fn inverse(&self, point: &Point2) -> Result<GeoPoint2d> {
        self.projection.unproject(point).ok_or_else(|| {
            GeoframeTypesError::Transform {
                x: point.x(),
                y: point.y(),
            }
            .into()
        })
    }

    /// Converts every coordinate of a geographic geometry into local coordinates.
    pub fn to_local<G>(&self, geometry: &Geo<G>) -> Result<Local<G::Output>>
    where
        G: MapCoords<f64, f64>,
    {
        let local = geometry.inner().try_map_coords(|c: Coord<f64>| {
            self.forward(&GeoPoint2d::from(c)).map(Coord::from)
        })?;
        Ok(Local::new(local))
    }

    /// Converts every coordinate of a local geometry back into geographic coordinates.
    pub fn to_geo<G>(&self, geometry: &Local<G>) -> Result<Geo<G::Output>>
    where
        G: MapCoords<f64, f64>,
    {
        let geo = geometry
            .inner()
            .try_map_coords(|c: Coord<f64>| self.inverse(&Point2::from(c)).map(Coord::from))?;
        Ok(Geo::new(geo))
    }
}

impl Projection for LocalFrame {
    type InPoint = GeoPoint2d;
    type OutPoint = Point2;

    fn project(&self, input: &GeoPoint2d) -> Option<Point2> {
        self.projection.project(input)
    }

    fn unproject(&self, input: &Point2) -> Option<GeoPoint2d> {
        self.projection.unproject(input)
    }
}
