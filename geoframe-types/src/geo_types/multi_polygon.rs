use geo_types::{CoordNum, MultiPolygon};

use crate::geometry_type::{AmbiguousSpace, GeometryType};

impl<T: CoordNum> GeometryType for MultiPolygon<T> {
    type Space = AmbiguousSpace;
}
