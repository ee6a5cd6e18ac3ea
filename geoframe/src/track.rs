//! Geodesic profile of a path.
//!
//! Headings and distances are computed on the WGS84 ellipsoid with Karney's geodesic algorithm, directly on the
//! geographic coordinates. No projection is involved.

use geo::GeodesicBearing;
use geo_types::{Coord, Geometry, LineString, Point};
use geoframe_types::angle::{wrap_to_180, wrap_to_360};
use geoframe_types::{GeoGeometry, GeoLineString};
use serde::{Deserialize, Serialize};

use crate::error::{GeoframeError, Result};
use crate::mean::geometry_kind;

/// Per-vertex description of a path.
///
/// All per-vertex sequences have the same length as the path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackProfile {
    /// Latitudes of the vertices in degrees.
    pub latitudes: Vec<f64>,
    /// Longitudes of the vertices in degrees, normalized into `[-180, 180]`.
    pub longitudes: Vec<f64>,
    /// Heading at every vertex in degrees clockwise from north, in `[0, 360)`.
    ///
    /// Every vertex but the last gets the initial azimuth of the segment starting at it. The last vertex gets the
    /// heading at the end of the last segment, so that it continues in the direction of travel. A path of a single
    /// vertex has heading `0`.
    pub azimuths: Vec<f64>,
    /// Distance in meters travelled from the first vertex, starting at `0`.
    pub along_track: Vec<f64>,
    /// Geodesic length in meters of every segment (one less than the number of vertices).
    pub segment_distances: Vec<f64>,
}

impl TrackProfile {
    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.latitudes.len()
    }

    /// Returns true if the profile has no vertices.
    pub fn is_empty(&self) -> bool {
        self.latitudes.is_empty()
    }

    /// Total length of the path in meters.
    pub fn total_distance(&self) -> f64 {
        self.along_track.last().copied().unwrap_or(0.0)
    }
}

/// Computes the geodesic profile of the `path`.
///
/// # Errors
/// [`GeoframeError::InvalidGeometry`] if the path has no vertices, or a vertex has non-finite coordinates or a
/// latitude out of `[-90, 90]`.
pub fn process_linestring(path: &GeoLineString) -> Result<TrackProfile> {
    profile(path.inner())
}

/// Computes the geodesic profile of a geometry that must be a line string.
///
/// # Errors
/// [`GeoframeError::InvalidGeometry`] if the geometry is not a line string, or for the reasons listed in
/// [`process_linestring`].
pub fn process_geometry(geometry: &GeoGeometry) -> Result<TrackProfile> {
    match geometry.inner() {
        Geometry::LineString(path) => profile(path),
        other => Err(GeoframeError::InvalidGeometry(format!(
            "expected a LineString, got {}",
            geometry_kind(other)
        ))),
    }
}

fn profile(path: &LineString<f64>) -> Result<TrackProfile> {
    let coords = &path.0;
    if coords.is_empty() {
        return Err(GeoframeError::InvalidGeometry("path has no vertices".into()));
    }

    if let Some(c) = coords
        .iter()
        .find(|c| !c.x.is_finite() || !c.y.is_finite() || c.y.abs() > 90.0)
    {
        return Err(GeoframeError::InvalidGeometry(format!(
            "path vertex ({}, {}) is not a valid geographic coordinate",
            c.x, c.y
        )));
    }

    let points: Vec<Point<f64>> = coords
        .iter()
        .map(|c| Point(Coord {
            x: wrap_to_180(c.x),
            y: c.y,
        }))
        .collect();

    let mut azimuths = Vec::with_capacity(points.len());
    let mut segment_distances = Vec::with_capacity(points.len().saturating_sub(1));
    let mut along_track = Vec::with_capacity(points.len());
    along_track.push(0.0);

    let mut travelled = 0.0;
    for pair in points.windows(2) {
        let (bearing, distance) = pair[0].geodesic_bearing_distance(pair[1]);
        azimuths.push(wrap_to_360(bearing));
        segment_distances.push(distance);
        travelled += distance;
        along_track.push(travelled);
    }

    let last_azimuth = match points.as_slice() {
        [.., before, last] => {
            let (back_bearing, _) = last.geodesic_bearing_distance(*before);
            wrap_to_360(back_bearing + 180.0)
        }
        _ => 0.0,
    };
    azimuths.push(last_azimuth);

    log::trace!(
        "Processed path of {} vertices, {:.3} m",
        points.len(),
        travelled
    );

    Ok(TrackProfile {
        latitudes: points.iter().map(|p| p.y()).collect(),
        longitudes: points.iter().map(|p| p.x()).collect(),
        azimuths,
        along_track,
        segment_distances,
    })
}
