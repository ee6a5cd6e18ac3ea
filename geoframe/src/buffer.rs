use geo::{BooleanOps, Translate};
use geo_types::MultiPolygon;
use geoframe_types::angle::wrap_to_180;
use geoframe_types::cartesian::Vector2;
use geoframe_types::{GeoMultiPolygon, GeoPolygon, Local, LocalMultiPolygon};

use crate::error::{GeoframeError, Result};
use crate::geoframe::Geoframe;
use crate::validate::validate_polygon;

/// Moves a local geometry by `distance` meters towards the compass `azimuth` (degrees clockwise from north).
pub fn translate_along<G>(geometry: &Local<G>, distance: f64, azimuth: f64) -> Local<G>
where
    G: Translate<f64>,
{
    let offset = Vector2::from_azimuth(azimuth) * distance;
    geometry.map(|g| g.translate(offset.dx(), offset.dy()))
}

fn union_translated(
    base: &LocalMultiPolygon,
    distance: f64,
    azimuth: f64,
) -> LocalMultiPolygon {
    let forward = translate_along(base, distance, azimuth);
    let backward = translate_along(base, distance, azimuth + 180.0);

    base.map(|b| b.union(forward.inner()).union(backward.inner()))
}

fn check_distance(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GeoframeError::InvalidParameter {
            name,
            reason: format!("must be a finite positive number of meters, got {value}"),
        })
    }
}

impl Geoframe {
    /// Expands the `polygon` by independent distances along and across the `azimuth` heading.
    ///
    /// In the local frame of the polygon, copies shifted forward and backward by `along_track` meters are merged
    /// with the polygon, then copies of that shape shifted to both sides by `across_track` meters are merged with it.
    /// The result covers the polygon and extends exactly `along_track` meters beyond it in both directions of the
    /// heading and `across_track` meters to both sides. It is not a uniform-radius buffer.
    ///
    /// If the along-track distance is larger than the polygon the shifted copies do not overlap, and the result
    /// consists of several parts.
    ///
    /// # Errors
    /// * [`GeoframeError::InvalidGeometry`] if the polygon is not valid.
    /// * [`GeoframeError::InvalidParameter`] if a distance is not a finite positive number, or the azimuth is not
    ///   finite.
    /// * [`GeoframeError::Computation`] wrapping any later failure.
    pub fn buffer_along_azimuth(
        &self,
        polygon: &GeoPolygon,
        along_track: f64,
        across_track: f64,
        azimuth: f64,
    ) -> Result<GeoMultiPolygon> {
        validate_polygon(polygon)?;
        check_distance("along_track", along_track)?;
        check_distance("across_track", across_track)?;
        if !azimuth.is_finite() {
            return Err(GeoframeError::InvalidParameter {
                name: "azimuth",
                reason: format!("must be a finite number, got {azimuth}"),
            });
        }

        self.buffer_in_frame(polygon, along_track, across_track, wrap_to_180(azimuth))
            .map_err(|err| err.during("azimuth buffer"))
    }

    fn buffer_in_frame(
        &self,
        polygon: &GeoPolygon,
        along_track: f64,
        across_track: f64,
        azimuth: f64,
    ) -> Result<GeoMultiPolygon> {
        let frame = self.local_frame(polygon)?;
        let local = frame
            .to_local(polygon)?
            .map(|p| MultiPolygon::new(vec![p.clone()]));

        let along = union_translated(&local, along_track, azimuth);
        let buffered = union_translated(&along, across_track, azimuth + 90.0);

        match buffered.inner().0.len() {
            0 => {
                return Err(GeoframeError::Degenerate(
                    "union of the shifted polygons is empty".into(),
                ))
            }
            1 => {}
            parts => log::warn!(
                "Buffer along {azimuth}° by {along_track} m is larger than the polygon, result has {parts} parts"
            ),
        }

        frame.to_geo(&buffered)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;
    use geo::{Area, EuclideanDistance};
    use geo_types::{point, polygon, LineString};
    use geoframe_types::Disambiguate;

    use super::*;

    fn square() -> GeoPolygon {
        polygon![
            (x: 30.000, y: 10.000),
            (x: 30.001, y: 10.000),
            (x: 30.001, y: 10.001),
            (x: 30.000, y: 10.001),
        ]
        .to_geo2d()
    }

    /// Extent of the multipolygon in the local frame of `reference` along the compass direction.
    fn extent(reference: &GeoPolygon, geometry: &GeoMultiPolygon, azimuth: f64) -> f64 {
        let frame = Geoframe::default().local_frame(reference).unwrap();
        let local = frame.to_local(geometry).unwrap();
        let direction = Vector2::from_azimuth(azimuth);
        let projections: Vec<f64> = local
            .inner()
            .0
            .iter()
            .flat_map(|p| p.exterior().coords())
            .map(|c| c.x * direction.dx() + c.y * direction.dy())
            .collect();

        let max = projections.iter().cloned().fold(f64::MIN, f64::max);
        let min = projections.iter().cloned().fold(f64::MAX, f64::min);
        max - min
    }

    #[test]
    fn translate_along_heading() {
        let line: Local<LineString<f64>> =
            LineString::from(vec![(0.0, 0.0), (1.0, 1.0)]).to_cartesian2d();

        let east = translate_along(&line, 10.0, 90.0);
        assert_abs_diff_eq!(east.inner().0[0].x, 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(east.inner().0[0].y, 0.0, epsilon = 1e-12);

        let south_west = translate_along(&line, 2f64.sqrt(), -135.0);
        assert_abs_diff_eq!(south_west.inner().0[1].x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(south_west.inner().0[1].y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn buffer_grows_and_contains_polygon() {
        let polygon = square();
        let buffered = Geoframe::default()
            .buffer_along_azimuth(&polygon, 20.0, 10.0, 30.0)
            .unwrap();

        assert_eq!(buffered.inner().0.len(), 1);
        assert!(buffered.inner().unsigned_area() > polygon.inner().unsigned_area());
        let frame = Geoframe::default().local_frame(&polygon).unwrap();
        let local = frame.to_local(&buffered).unwrap();
        for c in frame.to_local(&polygon).unwrap().inner().exterior().coords() {
            let distance = point!(x: c.x, y: c.y).euclidean_distance(local.inner());
            assert!(distance < 1e-6, "vertex {c:?} is {distance} m outside");
        }
    }

    #[test]
    fn buffer_extends_by_exact_offsets() {
        let polygon = square();
        let buffered = Geoframe::default()
            .buffer_along_azimuth(&polygon, 20.0, 10.0, 30.0)
            .unwrap();
        let original = polygon.map(|p| MultiPolygon::new(vec![p.clone()]));

        assert_abs_diff_eq!(
            extent(&polygon, &buffered, 30.0),
            extent(&polygon, &original, 30.0) + 40.0,
            epsilon = 1e-3
        );
        assert_abs_diff_eq!(
            extent(&polygon, &buffered, 120.0),
            extent(&polygon, &original, 120.0) + 20.0,
            epsilon = 1e-3
        );
    }

    #[test]
    fn azimuth_is_wrapped() {
        let geoframe = Geoframe::default();
        let a = geoframe
            .buffer_along_azimuth(&square(), 15.0, 5.0, 45.0)
            .unwrap();
        let b = geoframe
            .buffer_along_azimuth(&square(), 15.0, 5.0, 405.0)
            .unwrap();
        assert_abs_diff_eq!(
            a.inner().unsigned_area(),
            b.inner().unsigned_area(),
            epsilon = 1e-15
        );
    }

    #[test]
    fn long_offset_gives_multiple_parts() {
        let buffered = Geoframe::default()
            .buffer_along_azimuth(&square(), 500.0, 10.0, 30.0)
            .unwrap();
        assert_eq!(buffered.inner().0.len(), 3);
    }

    #[test]
    fn rejects_invalid_distances() {
        let geoframe = Geoframe::default();
        for (along, across, name) in [
            (0.0, 10.0, "along_track"),
            (-5.0, 10.0, "along_track"),
            (f64::NAN, 10.0, "along_track"),
            (10.0, 0.0, "across_track"),
            (10.0, f64::INFINITY, "across_track"),
        ] {
            assert_matches!(
                geoframe.buffer_along_azimuth(&square(), along, across, 0.0),
                Err(GeoframeError::InvalidParameter { name: n, .. }) if n == name
            );
        }

        assert_matches!(
            geoframe.buffer_along_azimuth(&square(), 10.0, 10.0, f64::NAN),
            Err(GeoframeError::InvalidParameter { name: "azimuth", .. })
        );
    }

    #[test]
    fn rejects_invalid_polygon() {
        let line = polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0)].to_geo2d();
        assert_matches!(
            Geoframe::default().buffer_along_azimuth(&line, 10.0, 10.0, 0.0),
            Err(GeoframeError::InvalidGeometry(_))
        );
    }
}
