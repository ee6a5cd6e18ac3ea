//! Geometry vocabulary for locally projected geographic computations.
//!
//! Geometries from the [`geo_types`] crate do not know whether their coordinates are longitude/latitude degrees or
//! projected meters. This crate attaches that knowledge at the type level (see [`Disambiguate`] and the [`Geo`] /
//! [`Local`] aliases), so that a local-space operation cannot be applied to geographic data by accident.
//!
//! It also provides the pieces needed to move between the two spaces: the [`Datum`](geo::Datum) of the ellipsoid,
//! the [`Crs`](geo::Crs) of a zoned transverse projection and the [`Projection`](geo::Projection) that performs the
//! conversion.

pub mod angle;
pub mod cartesian;
mod disambig;
pub mod error;
pub mod geo;
mod geo_types;
pub mod geometry_type;
mod segment;

pub use disambig::{
    Disambig, Disambiguate, Geo, GeoGeometry, GeoLineString, GeoMultiPolygon, GeoPolygon, Local,
    LocalMultiPolygon, LocalPolygon,
};
pub use segment::Segment;
