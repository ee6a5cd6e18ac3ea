//! See documentation for [`GeometryType`] trait.
use serde::{Deserialize, Serialize};

/// Assigns a coordinate space to a geometry type.
pub trait GeometryType {
    /// Coordinate space that this geometry uses. This specifies what kind of coordinates the geometry uses.
    ///
    /// The defined coordinate spaces are:
    /// * [`GeoSpace2d`] - longitude and latitude in degrees
    /// * [`CartesianSpace2d`] - projected coordinates in meters
    ///
    /// Some types are not bound by the coordinate space they can represent (all [`geo_types`] geometries are like
    /// this). In this case [`AmbiguousSpace`] space is used. These can be converted into a specific coordinate space
    /// using [`Disambiguate`](crate::Disambiguate) trait.
    type Space;
}

/// Geographic coordinate space marker.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize)]
pub struct GeoSpace2d;

/// 2d cartesian coordinate space marker.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize)]
pub struct CartesianSpace2d;

/// See [`Disambiguate`](super::Disambiguate).
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize)]
pub struct AmbiguousSpace;
