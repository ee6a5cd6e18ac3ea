use geo_types::{CoordNum, Geometry};

use crate::geometry_type::{AmbiguousSpace, GeometryType};

impl<T: CoordNum> GeometryType for Geometry<T> {
    type Space = AmbiguousSpace;
}
