use geo::Area;
use geo_types::{Coord, LineString, Polygon};
use geoframe_types::{Disambig, Segment};

use crate::error::{GeoframeError, Result};

/// Minimum number of coordinates in a closed ring (three distinct vertices plus the closing one).
const MIN_RING_SIZE: usize = 4;

/// Checks that the polygon satisfies the structural contract of the polygon operations.
///
/// A valid polygon has a non-empty exterior ring of at least 4 finite coordinates, every ring is closed and does
/// not cross itself, and the polygon encloses a non-zero area. Consecutive duplicate vertices are allowed.
///
/// Works in any coordinate space.
pub fn validate_polygon<Space>(polygon: &Disambig<Polygon<f64>, Space>) -> Result<()> {
    let polygon = polygon.inner();
    let exterior = polygon.exterior();

    if exterior.0.is_empty() {
        return Err(GeoframeError::InvalidGeometry("polygon is empty".into()));
    }

    validate_ring(exterior, "exterior ring")?;
    for (index, interior) in polygon.interiors().iter().enumerate() {
        validate_ring(interior, &format!("interior ring {index}"))?;
    }

    if polygon.unsigned_area() <= 0.0 {
        return Err(GeoframeError::InvalidGeometry(
            "polygon has zero area".into(),
        ));
    }

    log::debug!(
        "Polygon with {} exterior coordinates and {} holes is valid",
        exterior.0.len(),
        polygon.interiors().len()
    );

    Ok(())
}

fn validate_ring(ring: &LineString<f64>, name: &str) -> Result<()> {
    let invalid = |reason: String| -> Result<()> {
        Err(GeoframeError::InvalidGeometry(format!("{name} {reason}")))
    };

    if ring.0.len() < MIN_RING_SIZE {
        return invalid(format!(
            "has {} coordinates, at least {MIN_RING_SIZE} are required",
            ring.0.len()
        ));
    }

    if let Some(c) = ring.0.iter().find(|c| !c.x.is_finite() || !c.y.is_finite()) {
        return invalid(format!("contains non-finite coordinate ({}, {})", c.x, c.y));
    }

    if !ring.is_closed() {
        return invalid("is not closed".into());
    }

    let mut coords = ring.0.clone();
    coords.dedup();
    if coords.len() < MIN_RING_SIZE {
        return invalid("has less than 3 distinct vertices".into());
    }

    if let Some((i, j)) = find_self_intersection(&coords) {
        return invalid(format!("intersects itself (segments {i} and {j})"));
    }

    Ok(())
}

/// Returns indices of the first pair of non-adjacent ring segments that touch each other.
fn find_self_intersection(ring: &[Coord<f64>]) -> Option<(usize, usize)> {
    let segments: Vec<_> = ring.windows(2).map(|w| Segment(&w[0], &w[1])).collect();
    let count = segments.len();

    for i in 0..count {
        for j in (i + 2)..count {
            // first and last segments share the closing vertex
            if i == 0 && j == count - 1 {
                continue;
            }

            if segments[i].intersects(&segments[j]) {
                return Some((i, j));
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use geo_types::{line_string, polygon};
    use geoframe_types::Disambiguate;

    use super::*;

    #[test]
    fn valid_polygons() {
        let square = polygon![
            (x: 0.0, y: 0.0),
            (x: 0.0, y: 1.0),
            (x: 1.0, y: 1.0),
            (x: 1.0, y: 0.0),
        ];
        assert!(validate_polygon(&square.clone().to_geo2d()).is_ok());
        assert!(validate_polygon(&square.to_cartesian2d()).is_ok());

        let with_hole = polygon!(
            exterior: [(x: 0.0, y: 0.0), (x: 0.0, y: 10.0), (x: 10.0, y: 10.0), (x: 10.0, y: 0.0)],
            interiors: [[(x: 2.0, y: 2.0), (x: 2.0, y: 4.0), (x: 4.0, y: 4.0), (x: 4.0, y: 2.0)]],
        );
        assert!(validate_polygon(&with_hole.to_cartesian2d()).is_ok());

        let repeated_vertex = polygon![
            (x: 0.0, y: 0.0),
            (x: 0.0, y: 1.0),
            (x: 0.0, y: 1.0),
            (x: 1.0, y: 1.0),
            (x: 1.0, y: 0.0),
        ];
        assert!(validate_polygon(&repeated_vertex.to_cartesian2d()).is_ok());
    }

    #[test]
    fn empty_polygon() {
        let polygon = Polygon::new(LineString::<f64>::new(vec![]), vec![]).to_geo2d();
        assert_matches!(
            validate_polygon(&polygon),
            Err(GeoframeError::InvalidGeometry(msg)) if msg.contains("empty")
        );
    }

    #[test]
    fn too_few_vertices() {
        let polygon = polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 1.0)].to_geo2d();
        assert_matches!(
            validate_polygon(&polygon),
            Err(GeoframeError::InvalidGeometry(_))
        );
    }

    #[test]
    fn not_closed() {
        let open = line_string![(x: 0.0, y: 0.0), (x: 0.0, y: 1.0), (x: 1.0, y: 1.0), (x: 1.0, y: 0.0)];
        assert_matches!(
            validate_ring(&open, "exterior ring"),
            Err(GeoframeError::InvalidGeometry(msg)) if msg == "exterior ring is not closed"
        );
    }

    #[test]
    fn bow_tie_is_self_intersecting() {
        let polygon = polygon![
            (x: 0.0, y: 0.0),
            (x: 1.0, y: 1.0),
            (x: 1.0, y: 0.0),
            (x: 0.0, y: 1.0),
        ]
        .to_geo2d();
        assert_matches!(
            validate_polygon(&polygon),
            Err(GeoframeError::InvalidGeometry(msg)) if msg.contains("intersects itself")
        );
    }

    #[test]
    fn zero_area() {
        let polygon = polygon![
            (x: 0.0, y: 0.0),
            (x: 1.0, y: 1.0),
            (x: 2.0, y: 2.0),
            (x: 1.0, y: 1.0),
        ]
        .to_geo2d();
        assert_matches!(
            validate_polygon(&polygon),
            Err(GeoframeError::InvalidGeometry(_))
        );
    }

    #[test]
    fn non_finite_coordinates() {
        let polygon = polygon![
            (x: 0.0, y: 0.0),
            (x: 0.0, y: f64::INFINITY),
            (x: 1.0, y: 1.0),
        ]
        .to_geo2d();
        assert_matches!(
            validate_polygon(&polygon),
            Err(GeoframeError::InvalidGeometry(msg)) if msg.contains("non-finite")
        );
    }
}
