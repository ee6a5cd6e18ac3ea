use geo_types::{CoordNum, LineString};

use crate::geometry_type::{AmbiguousSpace, GeometryType};

impl<T: CoordNum> GeometryType for LineString<T> {
    type Space = AmbiguousSpace;
}
