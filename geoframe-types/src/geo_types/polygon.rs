use geo_types::{CoordNum, Polygon};

use crate::geometry_type::{AmbiguousSpace, GeometryType};

impl<T: CoordNum> GeometryType for Polygon<T> {
    type Space = AmbiguousSpace;
}
