//! Rotated rectangles enclosing a geographic polygon.
//!
//! Both kinds of rectangles are computed in the local frame of the polygon: the polygon is projected, its convex
//! hull is fitted with a rectangle and the rectangle is projected back into geographic coordinates.

use geo::{Centroid, ConvexHull};
use geo_types::{Coord, LineString, Polygon};
use geoframe_types::angle::wrap_to_180;
use geoframe_types::cartesian::{CartesianPoint2d, Point2, Rect, Vector2};
use geoframe_types::geo::impls::GeoPoint2d;
use geoframe_types::{GeoPolygon, Local, LocalPolygon};
use nalgebra::Rotation2;

use crate::error::{GeoframeError, Result};
use crate::geoframe::Geoframe;
use crate::validate::validate_polygon;

/// Rectangle at an arbitrary orientation, in geographic coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct RotatedRectangle {
    polygon: GeoPolygon,
    hull: GeoPolygon,
    centroid: GeoPoint2d,
    azimuth: f64,
    length: f64,
    width: f64,
}

impl RotatedRectangle {
    /// The rectangle as a polygon with 4 distinct vertices.
    pub fn polygon(&self) -> &GeoPolygon {
        &self.polygon
    }

    /// Convex hull of the input polygon the rectangle was fitted to.
    pub fn hull(&self) -> &GeoPolygon {
        &self.hull
    }

    /// Center of the rectangle.
    pub fn centroid(&self) -> GeoPoint2d {
        self.centroid
    }

    /// Compass heading of the long side in degrees.
    ///
    /// For [`Geoframe::minimum_rotated_rectangle`] the value is in `[-90, 90)`. For [`Geoframe::rotated_rectangle`]
    /// it is the requested azimuth (wrapped into `[-180, 180]`) if the extent of the polygon along the requested
    /// heading is not shorter than across it, and the requested azimuth rotated by 90° otherwise.
    pub fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Length of the longer side in meters.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Length of the shorter side in meters.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Area of the rectangle in square meters, as measured in the local frame.
    pub fn area(&self) -> f64 {
        self.length * self.width
    }
}

/// Rectangle in local coordinates, corners in counterclockwise order.
#[derive(Debug, Clone)]
struct LocalRectangle {
    corners: [Point2; 4],
    center: Point2,
    azimuth: f64,
    length: f64,
    width: f64,
}

impl LocalRectangle {
    fn to_polygon(&self) -> LocalPolygon {
        let ring: LineString<f64> = self.corners.iter().map(|p| Coord::from(*p)).collect();
        Local::new(Polygon::new(ring, vec![]))
    }
}

impl Geoframe {
    /// Computes the minimum-area rectangle enclosing the `polygon`.
    ///
    /// The rectangle is found in the local frame of the polygon with rotating calipers over the convex hull, so it
    /// takes linear time after the hull is built.
    ///
    /// # Errors
    /// * [`GeoframeError::InvalidGeometry`] if the polygon is not valid (see [`validate_polygon`]).
    /// * [`GeoframeError::Computation`] wrapping any later failure (no local CRS for the polygon, failed
    ///   projection).
    pub fn minimum_rotated_rectangle(&self, polygon: &GeoPolygon) -> Result<RotatedRectangle> {
        validate_polygon(polygon)?;
        self.fit_rectangle(polygon, minimum_area_rectangle)
            .map_err(|err| err.during("minimum rotated rectangle"))
    }

    /// Computes the rectangle enclosing the `polygon` with its sides aligned to the `azimuth` (degrees clockwise
    /// from north).
    ///
    /// # Errors
    /// * [`GeoframeError::InvalidGeometry`] if the polygon is not valid (see [`validate_polygon`]).
    /// * [`GeoframeError::InvalidParameter`] if the azimuth is not a finite number.
    /// * [`GeoframeError::Computation`] wrapping any later failure.
    pub fn rotated_rectangle(&self, polygon: &GeoPolygon, azimuth: f64) -> Result<RotatedRectangle> {
        validate_polygon(polygon)?;
        if !azimuth.is_finite() {
            return Err(GeoframeError::InvalidParameter {
                name: "azimuth",
                reason: format!("must be a finite number, got {azimuth}"),
            });
        }

        let azimuth = wrap_to_180(azimuth);
        self.fit_rectangle(polygon, |hull| azimuth_rectangle(hull, azimuth))
            .map_err(|err| err.during("rotated rectangle"))
    }

    fn fit_rectangle(
        &self,
        polygon: &GeoPolygon,
        fit: impl FnOnce(&[Point2]) -> Result<LocalRectangle>,
    ) -> Result<RotatedRectangle> {
        let frame = self.local_frame(polygon)?;
        let local = frame.to_local(polygon)?;
        let hull = local.map(|p| p.convex_hull());

        let rectangle = fit(&hull_vertices(hull.inner())?)?;
        log::debug!(
            "Fitted {:.3} x {:.3} m rectangle at {:.4}° in {}",
            rectangle.length,
            rectangle.width,
            rectangle.azimuth,
            frame.crs()
        );

        Ok(RotatedRectangle {
            polygon: frame.to_geo(&rectangle.to_polygon())?,
            hull: frame.to_geo(&hull)?,
            centroid: frame.inverse(&rectangle.center)?,
            azimuth: rectangle.azimuth,
            length: rectangle.length,
            width: rectangle.width,
        })
    }
}

/// Distinct vertices of a convex hull in counterclockwise order.
fn hull_vertices(hull: &Polygon<f64>) -> Result<Vec<Point2>> {
    let mut points: Vec<Point2> = hull.exterior().coords().map(|c| Point2::from(*c)).collect();
    if points.len() > 1 && points.first() == points.last() {
        points.pop();
    }

    if points.len() < 3 {
        return Err(GeoframeError::Degenerate(format!(
            "convex hull has {} distinct vertices",
            points.len()
        )));
    }

    Ok(points)
}

fn dot(v: Vector2, w: Vector2) -> f64 {
    v.dx() * w.dx() + v.dy() * w.dy()
}

/// Index of the hull vertex with the largest `measure`.
fn argmax(points: &[Point2], measure: impl Fn(&Point2) -> f64) -> usize {
    let mut best = 0;
    for (index, point) in points.iter().enumerate().skip(1) {
        if measure(point) > measure(&points[best]) {
            best = index;
        }
    }

    best
}

/// Moves `index` forward around the hull while the `measure` keeps growing.
fn advance(points: &[Point2], mut index: usize, measure: impl Fn(&Point2) -> f64) -> usize {
    let n = points.len();
    for _ in 0..n {
        let next = (index + 1) % n;
        if measure(&points[next]) > measure(&points[index]) {
            index = next;
        } else {
            break;
        }
    }

    index
}

/// Rotating calipers over a counterclockwise convex hull.
///
/// The minimum-area enclosing rectangle has a side flush with one of the hull edges. For every edge the three other
/// supporting lines are tracked with pointers that only move forward around the hull, so the whole pass is O(n).
fn minimum_area_rectangle(hull: &[Point2]) -> Result<LocalRectangle> {
    let n = hull.len();
    let mut pointers: Option<(usize, usize, usize)> = None;
    let mut best: Option<(f64, LocalRectangle)> = None;

    for i in 0..n {
        let origin = hull[i];
        let edge = hull[(i + 1) % n] - origin;
        let edge_len = edge.magnitude();
        if edge_len == 0.0 {
            continue;
        }

        let e = edge * (1.0 / edge_len);
        let normal = Vector2::new(-e.dy(), e.dx());

        let along = |p: &Point2| dot(*p - origin, e);
        let behind = |p: &Point2| -along(p);
        let across = |p: &Point2| dot(*p - origin, normal);

        let (right, top, left) = match pointers {
            None => (
                argmax(hull, along),
                argmax(hull, across),
                argmax(hull, behind),
            ),
            Some((right, top, left)) => (
                advance(hull, right, along),
                advance(hull, top, across),
                advance(hull, left, behind),
            ),
        };
        pointers = Some((right, top, left));

        let max_along = along(&hull[right]);
        let min_along = along(&hull[left]);
        let height = across(&hull[top]);
        let side_along = max_along - min_along;
        let area = side_along * height;

        if best
            .as_ref()
            .is_some_and(|(best_area, _)| *best_area <= area)
        {
            continue;
        }

        let c0 = origin + e * min_along;
        let c1 = origin + e * max_along;
        let corners = [c0, c1, c1 + normal * height, c0 + normal * height];
        let center = origin + e * ((min_along + max_along) / 2.0) + normal * (height / 2.0);

        let (length, width, direction) = if side_along >= height {
            (side_along, height, e)
        } else {
            (height, side_along, normal)
        };

        best = Some((
            area,
            LocalRectangle {
                corners,
                center,
                azimuth: fold_axis(direction.azimuth()),
                length,
                width,
            },
        ));
    }

    best.map(|(_, rectangle)| rectangle).ok_or_else(|| {
        GeoframeError::Degenerate("convex hull has no edges of non-zero length".into())
    })
}

/// Folds the direction of an undirected axis into `[-90, 90)`.
fn fold_axis(azimuth: f64) -> f64 {
    (azimuth + 90.0).rem_euclid(180.0) - 90.0
}

/// Bounding box of the hull in a frame rotated so that the `azimuth` heading points along `+y`.
fn azimuth_rectangle(hull: &[Point2], azimuth: f64) -> Result<LocalRectangle> {
    let hull_polygon = Polygon::new(hull.iter().map(|p| Coord::from(*p)).collect(), vec![]);
    let pivot: Point2 = hull_polygon
        .centroid()
        .map(|p| Point2::from(p.0))
        .ok_or_else(|| GeoframeError::Degenerate("convex hull has no centroid".into()))?;

    let rotation = Rotation2::new(azimuth.to_radians());
    let to_rotated = |p: &Point2| {
        let v = rotation * nalgebra::Vector2::new(p.x() - pivot.x(), p.y() - pivot.y());
        Point2::new(v.x, v.y)
    };
    let to_local = |p: &Point2| {
        let v = rotation.inverse() * nalgebra::Vector2::new(p.x(), p.y());
        Point2::new(v.x + pivot.x(), v.y + pivot.y())
    };

    let rotated: Vec<Point2> = hull.iter().map(to_rotated).collect();
    let bbox = Rect::from_points(rotated.iter())
        .ok_or_else(|| GeoframeError::Degenerate("convex hull is empty".into()))?;

    let [a, b, c, d] = bbox.into_quadrangle();
    let corners = [a, d, c, b].map(|p| to_local(&p));

    let (along, across) = (bbox.height(), bbox.width());
    let (length, width, azimuth) = if along >= across {
        (along, across, azimuth)
    } else {
        (across, along, wrap_to_180(azimuth + 90.0))
    };

    Ok(LocalRectangle {
        corners,
        center: to_local(&bbox.center()),
        azimuth,
        length,
        width,
    })
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use assert_matches::assert_matches;
    use geo::{Area, EuclideanDistance, MinimumRotatedRect};
    use geo_types::{point, polygon};
    use geoframe_types::geo::GeoPoint;
    use geoframe_types::Disambiguate;

    use super::*;

    fn points(coords: &[(f64, f64)]) -> Vec<Point2> {
        coords.iter().map(|(x, y)| Point2::new(*x, *y)).collect()
    }

    /// Checks containment in the local frame of `polygon`, where the rectangle edges are straight lines.
    fn assert_encloses(rectangle: &RotatedRectangle, polygon: &GeoPolygon) {
        let frame = Geoframe::default().local_frame(polygon).unwrap();
        let local_rect = frame.to_local(rectangle.polygon()).unwrap();
        for c in frame.to_local(polygon).unwrap().inner().exterior().coords() {
            let distance = point!(x: c.x, y: c.y).euclidean_distance(local_rect.inner());
            assert!(distance < 1e-6, "vertex {c:?} is {distance} m outside");
        }
    }

    fn field() -> GeoPolygon {
        polygon![
            (x: 8.5400, y: 47.3700),
            (x: 8.5460, y: 47.3712),
            (x: 8.5471, y: 47.3745),
            (x: 8.5432, y: 47.3761),
            (x: 8.5395, y: 47.3738),
        ]
        .to_geo2d()
    }

    #[test]
    fn calipers_on_rotated_square() {
        let hull = points(&[(0.0, -1.0), (1.0, 0.0), (0.0, 1.0), (-1.0, 0.0)]);
        let rect = minimum_area_rectangle(&hull).unwrap();

        assert_relative_eq!(rect.length, 2f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(rect.width, 2f64.sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(rect.center, Point2::new(0.0, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(rect.azimuth.abs(), 45.0, epsilon = 1e-9);
    }

    #[test]
    fn calipers_on_elongated_hull() {
        // long axis from (0, 0) to (10, 10), i.e. heading north-east
        let hull = points(&[(0.0, 0.0), (10.0, 10.0), (9.5, 10.5), (-0.5, 0.5)]);
        let rect = minimum_area_rectangle(&hull).unwrap();

        assert_abs_diff_eq!(rect.azimuth, 45.0, epsilon = 1e-9);
        assert_relative_eq!(rect.length, 200f64.sqrt(), epsilon = 1e-9);
        assert_relative_eq!(rect.width, 0.5f64.sqrt(), epsilon = 1e-9);
    }

    #[test]
    fn calipers_match_reference_implementation() {
        let hull = points(&[
            (0.0, 0.0),
            (4.0, -1.0),
            (9.0, 1.0),
            (11.0, 5.0),
            (7.0, 9.0),
            (2.0, 8.0),
            (-1.0, 4.0),
        ]);
        let rect = minimum_area_rectangle(&hull).unwrap();

        let polygon = Polygon::new(hull.iter().map(|p| Coord::from(*p)).collect(), vec![]);
        let reference = polygon.minimum_rotated_rect().unwrap();
        assert_relative_eq!(
            rect.length * rect.width,
            reference.unsigned_area(),
            max_relative = 1e-9
        );
        assert_relative_eq!(
            rect.to_polygon().inner().unsigned_area(),
            reference.unsigned_area(),
            max_relative = 1e-9
        );
    }

    #[test]
    fn azimuth_rectangle_is_aligned_to_heading() {
        let hull = points(&[(0.0, 0.0), (4.0, 0.0), (4.0, 2.0), (0.0, 2.0)]);

        let north = azimuth_rectangle(&hull, 0.0).unwrap();
        assert_abs_diff_eq!(north.length, 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(north.width, 2.0, epsilon = 1e-12);
        // the polygon is wider than long along the heading
        assert_abs_diff_eq!(north.azimuth, 90.0, epsilon = 1e-12);

        let east = azimuth_rectangle(&hull, 90.0).unwrap();
        assert_abs_diff_eq!(east.azimuth, 90.0, epsilon = 1e-12);
        assert_abs_diff_eq!(east.center, Point2::new(2.0, 1.0), epsilon = 1e-12);
        for expected in &north.corners {
            let found = east.corners.iter().any(|c| {
                (c.x() - expected.x()).abs() < 1e-9 && (c.y() - expected.y()).abs() < 1e-9
            });
            assert!(found, "corner {expected:?} is missing");
        }

        let diagonal = azimuth_rectangle(&hull, 45.0).unwrap();
        assert!(diagonal.length * diagonal.width > 8.0);
    }

    #[test]
    fn square_near_equator_is_axis_aligned() {
        let square = polygon![
            (x: 0.0, y: 0.0),
            (x: 0.0, y: 0.001),
            (x: 0.001, y: 0.001),
            (x: 0.001, y: 0.0),
        ]
        .to_geo2d();

        let rect = Geoframe::default().minimum_rotated_rectangle(&square).unwrap();
        let azimuth = rect.azimuth().abs();
        assert!(azimuth < 0.5 || (azimuth - 90.0).abs() < 0.5, "{azimuth}");
        assert_relative_eq!(rect.length(), rect.width(), max_relative = 0.01);
        assert_encloses(&rect, &square);
        assert_eq!(rect.polygon().inner().exterior().0.len(), 5);
    }

    #[test]
    fn rectangles_enclose_polygon() {
        let geoframe = Geoframe::default();
        let polygon = field();

        let minimum = geoframe.minimum_rotated_rectangle(&polygon).unwrap();
        assert_encloses(&minimum, &polygon);

        for azimuth in [-135.0, -30.0, 0.0, 17.0, 90.0, 200.0] {
            let rect = geoframe.rotated_rectangle(&polygon, azimuth).unwrap();
            assert_encloses(&rect, &polygon);
            assert!(minimum.area() <= rect.area() * (1.0 + 1e-9));
        }
    }

    #[test]
    fn azimuth_is_wrapped() {
        let geoframe = Geoframe::default();
        let a = geoframe.rotated_rectangle(&field(), 200.0).unwrap();
        let b = geoframe.rotated_rectangle(&field(), -160.0).unwrap();

        assert_relative_eq!(a.area(), b.area(), max_relative = 1e-9);
        assert!((-180.0..=180.0).contains(&a.azimuth()));
        assert_abs_diff_eq!(a.centroid(), b.centroid(), epsilon = 1e-9);
    }

    #[test]
    fn hull_and_centroid_are_geographic() {
        let rect = Geoframe::default().minimum_rotated_rectangle(&field()).unwrap();
        let centroid = rect.centroid();
        assert!((8.539..8.548).contains(&centroid.lon()));
        assert!((47.37..47.377).contains(&centroid.lat()));
        assert_eq!(rect.hull().inner().exterior().0.len(), 6);
    }

    #[test]
    fn invalid_input_is_rejected_before_projection() {
        let geoframe = Geoframe::default();
        let bow_tie = polygon![
            (x: 0.0, y: 0.0),
            (x: 1.0, y: 1.0),
            (x: 1.0, y: 0.0),
            (x: 0.0, y: 1.0),
        ]
        .to_geo2d();

        assert_matches!(
            geoframe.minimum_rotated_rectangle(&bow_tie),
            Err(GeoframeError::InvalidGeometry(_))
        );
        assert_matches!(
            geoframe.rotated_rectangle(&field(), f64::NAN),
            Err(GeoframeError::InvalidParameter { name: "azimuth", .. })
        );
    }

    #[test]
    fn polar_polygon_fails_with_computation_error() {
        let polar = polygon![
            (x: 0.0, y: 85.0),
            (x: 1.0, y: 85.0),
            (x: 1.0, y: 86.0),
            (x: 0.0, y: 86.0),
        ]
        .to_geo2d();

        let err = Geoframe::default()
            .minimum_rotated_rectangle(&polar)
            .unwrap_err();
        assert_matches!(
            &err,
            GeoframeError::Computation { operation: "minimum rotated rectangle", .. }
        );
        assert_matches!(err.root_cause(), GeoframeError::CrsResolution { .. });
    }
}
