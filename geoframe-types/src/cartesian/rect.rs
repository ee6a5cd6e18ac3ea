use nalgebra::Scalar;
use num_traits::{Bounded, FromPrimitive, Num};
use serde::{Deserialize, Serialize};

use crate::cartesian::impls::Point2;
use crate::cartesian::traits::CartesianPoint2d;

/// Axis-aligned rectangle given by its lower-left and upper-right corners.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect<N = f64> {
    min: Point2<N>,
    max: Point2<N>,
}

impl<N: Num + Copy + PartialOrd + Bounded + Scalar + FromPrimitive> Rect<N> {
    /// Creates a rectangle spanning `[x_min, x_max] x [y_min, y_max]`.
    pub fn new(x_min: N, y_min: N, x_max: N, y_max: N) -> Self {
        Self {
            min: Point2::new(x_min, y_min),
            max: Point2::new(x_max, y_max),
        }
    }

    /// Left bound.
    pub fn x_min(&self) -> N {
        self.min.x()
    }

    /// Right bound.
    pub fn x_max(&self) -> N {
        self.max.x()
    }

    /// Bottom bound.
    pub fn y_min(&self) -> N {
        self.min.y()
    }

    /// Top bound.
    pub fn y_max(&self) -> N {
        self.max.y()
    }

    /// Extent along the x axis.
    pub fn width(&self) -> N {
        self.x_max() - self.x_min()
    }

    /// Extent along the y axis.
    pub fn height(&self) -> N {
        self.y_max() - self.y_min()
    }

    /// Smallest rectangle covering all the `points`, or `None` for an empty iterator.
    pub fn from_points<'a, P: CartesianPoint2d<Num = N> + 'a>(
        points: impl IntoIterator<Item = &'a P>,
    ) -> Option<Self> {
        points.into_iter().fold(None, |acc: Option<Self>, p| {
            let point = Point2::new(p.x(), p.y());
            Some(match acc {
                None => Self {
                    min: point,
                    max: point,
                },
                Some(rect) => rect.expanded_to(&point),
            })
        })
    }

    fn expanded_to(self, point: &Point2<N>) -> Self {
        let pick = |a: N, b: N, smaller: bool| if (b < a) == smaller { b } else { a };
        Self::new(
            pick(self.x_min(), point.x(), true),
            pick(self.y_min(), point.y(), true),
            pick(self.x_max(), point.x(), false),
            pick(self.y_max(), point.y(), false),
        )
    }

    /// Inclusive containment check.
    pub fn contains(&self, point: &impl CartesianPoint2d<Num = N>) -> bool {
        (self.x_min()..=self.x_max()).contains(&point.x())
            && (self.y_min()..=self.y_max()).contains(&point.y())
    }

    /// Center point.
    pub fn center(&self) -> Point2<N> {
        let two = N::one() + N::one();
        Point2::new(
            (self.x_min() + self.x_max()) / two,
            (self.y_min() + self.y_max()) / two,
        )
    }

    /// Corners of the rectangle, clockwise starting from the minimum corner.
    pub fn into_quadrangle(self) -> [Point2<N>; 4] {
        [
            self.min,
            Point2::new(self.x_min(), self.y_max()),
            self.max,
            Point2::new(self.x_max(), self.y_min()),
        ]
    }
}
