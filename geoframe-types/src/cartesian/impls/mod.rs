use approx::AbsDiffEq;
use nalgebra::Scalar;
use num_traits::{Bounded, FromPrimitive};
use serde::{Deserialize, Serialize};

use crate::cartesian::traits::{CartesianPoint2d, NewCartesianPoint2d};
use crate::geometry_type::{CartesianSpace2d, GeometryType};

/// A point in 2-dimensional cartesian coordinate space.
///
/// In this crate cartesian points are local projected coordinates: easting and northing in meters.
#[derive(Debug, Default, Copy, Clone, PartialEq, Hash, Serialize, Deserialize)]
pub struct Point2<Num = f64> {
    x: Num,
    y: Num,
}

impl<Num> Point2<Num> {
    /// Creates a new point with the given coordinates.
    pub const fn new(x: Num, y: Num) -> Self {
        Self { x, y }
    }

    /// Returns coordinates of the point as an array of `Num`.
    pub fn coords(&self) -> [Num; 2]
    where
        Num: Copy,
    {
        [self.x, self.y]
    }
}

/// Vector between two points in 2-dimensional cartesian coordinate space.
#[derive(Debug, Default, Copy, Clone, PartialEq, Hash, Serialize, Deserialize)]
pub struct Vector2<Num = f64> {
    dx: Num,
    dy: Num,
}

impl<Num: Copy> Vector2<Num> {
    /// Creates a new vector with the given coordinates.
    pub fn new(dx: Num, dy: Num) -> Self {
        Self { dx, dy }
    }

    /// Returns x coordinate of the vector.
    pub fn dx(&self) -> Num {
        self.dx
    }

    /// Returns y coordinate of the vector.
    pub fn dy(&self) -> Num {
        self.dy
    }

    /// Returns squared magnitude (squared length) of the vector.
    pub fn magnitude_sq(&self) -> Num
    where
        Num: num_traits::Num,
    {
        self.dx * self.dx + self.dy * self.dy
    }

    /// Returns magnitude (length) of the vector.
    pub fn magnitude(&self) -> Num
    where
        Num: num_traits::Float,
    {
        self.magnitude_sq().sqrt()
    }
}

impl Vector2<f64> {
    /// Unit vector pointing along the given compass azimuth (degrees clockwise from north, which is `+y`).
    pub fn from_azimuth(azimuth: f64) -> Self {
        let radians = azimuth.to_radians();
        Self::new(radians.sin(), radians.cos())
    }

    /// Compass azimuth of the vector in degrees, in `(-180, 180]`.
    pub fn azimuth(&self) -> f64 {
        self.dx.atan2(self.dy).to_degrees()
    }
}

impl<Num> std::ops::Sub<Point2<Num>> for Point2<Num>
where
    Num: std::ops::Sub<Num, Output = Num>,
{
    type Output = Vector2<Num>;

    fn sub(self, rhs: Point2<Num>) -> Self::Output {
        Vector2 {
            dx: self.x - rhs.x,
            dy: self.y - rhs.y,
        }
    }
}

impl<Num> std::ops::Add<Vector2<Num>> for Point2<Num>
where
    Num: std::ops::Add<Num, Output = Num>,
{
    type Output = Point2<Num>;

    fn add(self, rhs: Vector2<Num>) -> Self::Output {
        Self {
            x: self.x + rhs.dx,
            y: self.y + rhs.dy,
        }
    }
}

impl<Num> std::ops::Mul<Num> for Vector2<Num>
where
    Num: std::ops::Mul<Num, Output = Num> + Copy,
{
    type Output = Vector2<Num>;

    fn mul(self, rhs: Num) -> Self::Output {
        Self {
            dx: self.dx * rhs,
            dy: self.dy * rhs,
        }
    }
}

impl<Num> AbsDiffEq for Point2<Num>
where
    Num: AbsDiffEq<Num, Epsilon = Num> + Copy,
{
    type Epsilon = Num;

    fn default_epsilon() -> Self::Epsilon {
        Num::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl<Num: num_traits::Num + Copy + PartialOrd + Bounded + Scalar + FromPrimitive> CartesianPoint2d
    for Point2<Num>
{
    type Num = Num;

    fn x(&self) -> Num {
        self.x
    }
    fn y(&self) -> Num {
        self.y
    }
}

impl<Num: num_traits::Num + Copy + PartialOrd + Bounded + Scalar + FromPrimitive>
    NewCartesianPoint2d<Num> for Point2<Num>
{
    fn new(x: Num, y: Num) -> Self {
        Point2 { x, y }
    }
}

impl<Num: Scalar> GeometryType for Point2<Num> {
    type Space = CartesianSpace2d;
}

impl From<geo_types::Coord<f64>> for Point2<f64> {
    fn from(value: geo_types::Coord<f64>) -> Self {
        Self::new(value.x, value.y)
    }
}

impl From<Point2<f64>> for geo_types::Coord<f64> {
    fn from(value: Point2<f64>) -> Self {
        geo_types::coord!(x: value.x, y: value.y)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn azimuth_of_vectors() {
        assert_abs_diff_eq!(Vector2::new(0.0, 1.0).azimuth(), 0.0);
        assert_abs_diff_eq!(Vector2::new(1.0, 0.0).azimuth(), 90.0);
        assert_abs_diff_eq!(Vector2::new(0.0, -1.0).azimuth(), 180.0);
        assert_abs_diff_eq!(Vector2::new(-1.0, 0.0).azimuth(), -90.0);
    }

    #[test]
    fn from_azimuth_is_unit_length() {
        for azimuth in [-170.0, -45.0, 0.0, 30.0, 90.0, 135.0] {
            let v = Vector2::from_azimuth(azimuth);
            assert_abs_diff_eq!(v.magnitude(), 1.0, epsilon = 1e-12);
            assert_abs_diff_eq!(v.azimuth(), azimuth, epsilon = 1e-9);
        }
    }

    #[test]
    fn point_vector_arithmetic() {
        let a = Point2::new(1.0, 2.0);
        let b = Point2::new(4.0, 6.0);
        let v = b - a;
        assert_eq!(v.magnitude(), 5.0);
        assert_eq!(a + v * 2.0, Point2::new(7.0, 10.0));
    }
}
