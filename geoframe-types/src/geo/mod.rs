//! Geometries in geographic coordinates (latitude and longitude) (see [`GeoPoint`]) and conversion between
//! geographic and locally projected coordinate systems (see [`Crs`] and [`Projection`]).

mod crs;
mod datum;
pub mod impls;
mod traits;

pub use crs::{Crs, Hemisphere, ProjectionType};
pub use datum::Datum;
pub use traits::point::{GeoPoint, NewGeoPoint};
pub use traits::projection::{InvertedProjection, Projection};
