use geo_types::{CoordNum, Point};
use num_traits::Float;

use crate::geo::GeoPoint;
use crate::geometry_type::{AmbiguousSpace, GeometryType};

impl<T: CoordNum> GeometryType for Point<T> {
    type Space = AmbiguousSpace;
}

impl<T: CoordNum + Float> GeoPoint for Point<T> {
    type Num = T;

    fn lat(&self) -> Self::Num {
        self.y()
    }

    fn lon(&self) -> Self::Num {
        self.x()
    }
}
