//! Registry of local projected coordinate systems.
//!
//! A registry answers the question "which projected CRS is valid here?". The default [`UtmRegistry`] is a static
//! in-process table of UTM zones, so no external projection database is needed at runtime.

use geoframe_types::geo::impls::GeoPoint2d;
use geoframe_types::geo::{Crs, Datum, GeoPoint, Hemisphere, NewGeoPoint};
use parking_lot::Mutex;
use quick_cache::unsync::Cache;

/// Rectangular area in geographic coordinates (degrees).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaOfInterest {
    /// Western bound (longitude).
    pub west: f64,
    /// Southern bound (latitude).
    pub south: f64,
    /// Eastern bound (longitude).
    pub east: f64,
    /// Northern bound (latitude).
    pub north: f64,
}

impl AreaOfInterest {
    /// Creates a new area.
    pub fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west,
            south,
            east,
            north,
        }
    }

    /// Degenerate area covering a single point.
    pub fn point(point: &GeoPoint2d) -> Self {
        Self::new(point.lon(), point.lat(), point.lon(), point.lat())
    }

    /// Returns true if the two areas share at least one point (borders included).
    pub fn intersects(&self, other: &AreaOfInterest) -> bool {
        self.west <= other.east
            && other.west <= self.east
            && self.south <= other.north
            && other.south <= self.north
    }
}

/// Source of local projected coordinate systems.
pub trait CrsRegistry: Send + Sync {
    /// Returns all systems whose area of use intersects the `area`, in registry order.
    fn query(&self, area: &AreaOfInterest) -> Vec<Crs>;

    /// Returns the first system valid at the `point`, if any.
    fn lookup(&self, point: &GeoPoint2d) -> Option<Crs> {
        self.query(&AreaOfInterest::point(point)).into_iter().next()
    }
}

impl<R: CrsRegistry + ?Sized> CrsRegistry for Box<R> {
    fn query(&self, area: &AreaOfInterest) -> Vec<Crs> {
        (**self).query(area)
    }

    fn lookup(&self, point: &GeoPoint2d) -> Option<Crs> {
        (**self).lookup(point)
    }
}

#[derive(Debug, Clone)]
struct RegistryEntry {
    crs: Crs,
    area: AreaOfInterest,
}

/// Table of the 120 UTM zones (60 northern, 60 southern).
///
/// Entries are ordered the way EPSG numbers them: northern zones 1 to 60, then southern zones 1 to 60. Areas of use
/// are the standard 6° bands, from the equator to 84°N for northern zones and from 80°S to the equator for southern
/// ones. A point on a border matches both neighbours, and the first one in the table wins.
#[derive(Debug, Clone)]
pub struct UtmRegistry {
    entries: Vec<RegistryEntry>,
}

impl UtmRegistry {
    /// Northern limit of UTM coverage.
    pub const MAX_LAT: f64 = 84.0;
    /// Southern limit of UTM coverage.
    pub const MIN_LAT: f64 = -80.0;

    /// Creates the table for the given datum.
    pub fn new(datum: Datum) -> Self {
        let mut entries = Vec::with_capacity(120);
        for (hemisphere, south, north) in [
            (Hemisphere::North, 0.0, Self::MAX_LAT),
            (Hemisphere::South, Self::MIN_LAT, 0.0),
        ] {
            for zone in 1..=60u8 {
                let west = -180.0 + 6.0 * (zone - 1) as f64;
                let Some(crs) = Crs::utm_with_datum(zone, hemisphere, datum) else {
                    continue;
                };
                entries.push(RegistryEntry {
                    crs,
                    area: AreaOfInterest::new(west, south, west + 6.0, north),
                });
            }
        }

        Self { entries }
    }

    /// Number of systems in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for UtmRegistry {
    fn default() -> Self {
        Self::new(Datum::WGS84)
    }
}

impl CrsRegistry for UtmRegistry {
    fn query(&self, area: &AreaOfInterest) -> Vec<Crs> {
        self.entries
            .iter()
            .filter(|entry| entry.area.intersects(area))
            .map(|entry| entry.crs.clone())
            .collect()
    }
}

/// Memoizes [`CrsRegistry::lookup`] results of another registry.
///
/// Points are quantized to 1e-7 degrees (about 1 cm) and the lookup is performed for the quantized point, so the
/// result is a pure function of the cache key.
pub struct CachedRegistry<R> {
    inner: R,
    cache: Mutex<Cache<(i64, i64), Option<Crs>>>,
}

impl<R: CrsRegistry> CachedRegistry<R> {
    const QUANTUM: f64 = 1e7;

    /// Wraps `inner`, keeping up to `capacity` lookup results.
    pub fn new(inner: R, capacity: usize) -> Self {
        Self {
            inner,
            cache: Mutex::new(Cache::new(capacity.max(1))),
        }
    }

    /// The wrapped registry.
    pub fn inner(&self) -> &R {
        &self.inner
    }

    fn key(point: &GeoPoint2d) -> (i64, i64) {
        (
            (point.lon() * Self::QUANTUM).round() as i64,
            (point.lat() * Self::QUANTUM).round() as i64,
        )
    }
}

impl<R: CrsRegistry> CrsRegistry for CachedRegistry<R> {
    fn query(&self, area: &AreaOfInterest) -> Vec<Crs> {
        self.inner.query(area)
    }

    fn lookup(&self, point: &GeoPoint2d) -> Option<Crs> {
        if !point.is_finite() {
            return None;
        }

        let key = Self::key(point);
        if let Some(cached) = self.cache.lock().get(&key) {
            log::debug!("CRS registry cache hit for {key:?}");
            return cached.clone();
        }

        let quantized = GeoPoint2d::latlon(
            key.1 as f64 / Self::QUANTUM,
            key.0 as f64 / Self::QUANTUM,
        );
        let crs = self.inner.lookup(&quantized);
        log::debug!("CRS registry cache miss for {key:?}, resolved to {crs:?}");
        self.cache.lock().insert(key, crs.clone());

        crs
    }
}

#[cfg(test)]
mod tests {
    use geoframe_types::geo::ProjectionType;
    use geoframe_types::latlon;

    use super::*;

    fn epsg(point: GeoPoint2d) -> Option<u32> {
        UtmRegistry::default().lookup(&point).and_then(|crs| crs.epsg())
    }

    #[test]
    fn has_all_zones() {
        let registry = UtmRegistry::default();
        assert_eq!(registry.len(), 120);

        let all = registry.query(&AreaOfInterest::new(-180.0, -90.0, 180.0, 90.0));
        assert_eq!(all.len(), 120);
        assert_eq!(all[0].epsg(), Some(32601));
        assert_eq!(all[119].epsg(), Some(32760));
    }

    #[test]
    fn finds_zone_by_longitude_and_hemisphere() {
        assert_eq!(epsg(latlon!(52.5, 13.4)), Some(32633));
        assert_eq!(epsg(latlon!(-33.9, 151.2)), Some(32756));
        assert_eq!(epsg(latlon!(40.7, -74.0)), Some(32618));
        assert_eq!(epsg(latlon!(-22.9, -43.2)), Some(32723));
        assert_eq!(epsg(latlon!(0.0005, 0.0005)), Some(32631));
    }

    #[test]
    fn border_points_resolve_to_first_candidate() {
        let registry = UtmRegistry::default();

        let on_meridian = registry.query(&AreaOfInterest::point(&latlon!(10.0, 6.0)));
        assert_eq!(on_meridian.len(), 2);
        assert_eq!(epsg(latlon!(10.0, 6.0)), Some(32631));

        assert_eq!(epsg(latlon!(0.0, 20.0)), Some(32634));
        assert_eq!(epsg(latlon!(10.0, 180.0)), Some(32660));
        assert_eq!(epsg(latlon!(10.0, -180.0)), Some(32601));
    }

    #[test]
    fn polar_points_are_not_covered() {
        assert_eq!(epsg(latlon!(85.0, 10.0)), None);
        assert_eq!(epsg(latlon!(-80.5, 10.0)), None);
        assert_eq!(epsg(latlon!(84.0, 10.0)), Some(32632));
    }

    #[test]
    fn registry_uses_requested_datum() {
        let registry = UtmRegistry::new(Datum::GRS80);
        let crs = registry.lookup(&latlon!(45.0, 45.0)).unwrap();
        assert_eq!(crs.datum(), Datum::GRS80);
        assert_eq!(
            crs.projection_type(),
            ProjectionType::Utm {
                zone: 38,
                hemisphere: Hemisphere::North
            }
        );
    }

    #[test]
    fn cached_registry_matches_inner() {
        let cached = CachedRegistry::new(UtmRegistry::default(), 16);
        for point in [
            latlon!(52.5, 13.4),
            latlon!(52.5, 13.4),
            latlon!(-33.9, 151.2),
            latlon!(89.0, 0.0),
            latlon!(89.0, 0.0),
        ] {
            assert_eq!(cached.lookup(&point), cached.inner().lookup(&point));
        }
        assert_eq!(cached.lookup(&latlon!(f64::NAN, 0.0)), None);
    }
}
