//! Metric-accurate planar operations on geographic shapes.
//!
//! Planar algorithms (rotation, offsetting, bounding rectangles) give distorted results when applied to longitude and
//! latitude degrees directly, because degrees are not of uniform length. This crate projects every input into a
//! local frame selected for that input (a UTM zone chosen from its geographic mean), runs the planar algorithm in
//! meters and projects the result back.
//!
//! Operations:
//! * [`Geoframe::minimum_rotated_rectangle`] and [`Geoframe::rotated_rectangle`] fit rectangles around a polygon;
//! * [`Geoframe::buffer_along_azimuth`] expands a polygon along and across a heading;
//! * [`process_linestring`] computes geodesic headings and distances along a path;
//! * [`Geoframe::local_frame`] gives direct access to the projection pair used by the operations above.
//!
//! Geometries are [`geo_types`] geometries tagged with their coordinate space (see
//! [`Disambiguate`](geoframe_types::Disambiguate)):
//!
//! ```
//! use geo_types::polygon;
//! use geoframe_types::Disambiguate;
//!
//! let field = polygon![
//!     (x: 8.5400, y: 47.3700),
//!     (x: 8.5460, y: 47.3712),
//!     (x: 8.5471, y: 47.3745),
//!     (x: 8.5432, y: 47.3761),
//! ]
//! .to_geo2d();
//!
//! let rectangle = geoframe::minimum_rotated_rectangle(&field).unwrap();
//! assert!(rectangle.length() >= rectangle.width());
//!
//! let corridor = geoframe::buffer_along_azimuth(&field, 50.0, 10.0, 30.0).unwrap();
//! assert_eq!(corridor.inner().0.len(), 1);
//! ```
//!
//! The functions at the crate root use [`Geoframe::global`], the WGS84 configuration with the built-in UTM table. Use
//! [`GeoframeBuilder`] for anything else.

mod buffer;
mod builder;
mod distance;
mod error;
mod frame;
mod geoframe;
mod mean;
mod rectangle;
pub mod registry;
mod track;
mod validate;

use geoframe_types::geo::impls::GeoPoint2d;
use geoframe_types::geo::Crs;
use geoframe_types::{GeoMultiPolygon, GeoPolygon};

pub use buffer::translate_along;
pub use builder::GeoframeBuilder;
pub use distance::{haversine_distance, MEAN_EARTH_RADIUS};
pub use error::{GeoframeError, Result};
pub use frame::LocalFrame;
pub use geoframe::Geoframe;
pub use geoframe_types;
pub use mean::{geographic_mean, CoordinateSource};
pub use rectangle::RotatedRectangle;
pub use track::{process_geometry, process_linestring, TrackProfile};
pub use validate::validate_polygon;

/// Selects the local coordinate system for the `point`. See [`Geoframe::local_crs`].
pub fn local_crs(point: &GeoPoint2d) -> Result<Crs> {
    Geoframe::global().local_crs(point)
}

/// Derives the local frame of the `source`. See [`Geoframe::local_frame`].
pub fn local_frame<S: CoordinateSource + ?Sized>(source: &S) -> Result<LocalFrame> {
    Geoframe::global().local_frame(source)
}

/// Minimum-area rectangle enclosing the `polygon`. See [`Geoframe::minimum_rotated_rectangle`].
pub fn minimum_rotated_rectangle(polygon: &GeoPolygon) -> Result<RotatedRectangle> {
    Geoframe::global().minimum_rotated_rectangle(polygon)
}

/// Rectangle enclosing the `polygon` aligned to the `azimuth`. See [`Geoframe::rotated_rectangle`].
pub fn rotated_rectangle(polygon: &GeoPolygon, azimuth: f64) -> Result<RotatedRectangle> {
    Geoframe::global().rotated_rectangle(polygon, azimuth)
}

/// Expands the `polygon` along and across the `azimuth`. See [`Geoframe::buffer_along_azimuth`].
pub fn buffer_along_azimuth(
    polygon: &GeoPolygon,
    along_track: f64,
    across_track: f64,
    azimuth: f64,
) -> Result<GeoMultiPolygon> {
    Geoframe::global().buffer_along_azimuth(polygon, along_track, across_track, azimuth)
}
