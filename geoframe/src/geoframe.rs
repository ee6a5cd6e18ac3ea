use geoframe_types::geo::impls::GeoPoint2d;
use geoframe_types::geo::{Crs, Datum, GeoPoint};
use lazy_static::lazy_static;

use crate::builder::GeoframeBuilder;
use crate::error::{GeoframeError, Result};
use crate::frame::LocalFrame;
use crate::mean::{geographic_mean, CoordinateSource};
use crate::registry::CrsRegistry;

lazy_static! {
    static ref DEFAULT_GEOFRAME: Geoframe = Geoframe::default();
}

/// Entry point of the local projection pipeline.
///
/// `Geoframe` holds the configuration shared by all operations: the [`Datum`] the geographic mean and the
/// projections are computed on, and the [`CrsRegistry`] local coordinate systems are selected from. It has no
/// mutable state, so a single instance can be shared between threads and used for any number of unrelated
/// geometries.
///
/// ```
/// use geo_types::polygon;
/// use geoframe::Geoframe;
/// use geoframe_types::Disambiguate;
///
/// let geoframe = Geoframe::builder().with_registry_cache(1024).build();
/// let field = polygon![
///     (x: 8.540, y: 47.370),
///     (x: 8.546, y: 47.371),
///     (x: 8.545, y: 47.375),
///     (x: 8.539, y: 47.374),
/// ]
/// .to_geo2d();
///
/// let frame = geoframe.local_frame(&field).unwrap();
/// assert_eq!(frame.crs().epsg(), Some(32632));
/// ```
pub struct Geoframe {
    pub(crate) datum: Datum,
    pub(crate) registry: Box<dyn CrsRegistry>,
}

impl Geoframe {
    /// Creates a builder to configure a new instance.
    pub fn builder() -> GeoframeBuilder {
        GeoframeBuilder::default()
    }

    /// Shared instance with the default configuration (WGS84, static UTM table, no cache).
    pub fn global() -> &'static Geoframe {
        &DEFAULT_GEOFRAME
    }

    /// Datum used by the instance.
    pub fn datum(&self) -> Datum {
        self.datum
    }

    /// Registry used to select local coordinate systems.
    pub fn registry(&self) -> &dyn CrsRegistry {
        &*self.registry
    }

    /// Geographic mean of all coordinates of the `source`.
    ///
    /// See [`geographic_mean`] for the details.
    pub fn geographic_mean<S>(&self, source: &S) -> Result<GeoPoint2d>
    where
        S: CoordinateSource + ?Sized,
    {
        geographic_mean(source, &self.datum)
    }

    /// Selects the local projected coordinate system valid at the `point`.
    ///
    /// Fails with [`GeoframeError::CrsResolution`] if the registry has no system covering the point, e.g. close to
    /// the poles with the default UTM table.
    pub fn local_crs(&self, point: &GeoPoint2d) -> Result<Crs> {
        self.registry
            .lookup(point)
            .ok_or(GeoframeError::CrsResolution {
                lon: point.lon(),
                lat: point.lat(),
            })
    }

    /// Derives a local frame for the `source` geometries.
    ///
    /// The frame is centered at the geographic mean of the source and uses the coordinate system selected for that
    /// point. Every call derives a new frame, nothing is reused between calls.
    pub fn local_frame<S>(&self, source: &S) -> Result<LocalFrame>
    where
        S: CoordinateSource + ?Sized,
    {
        let centroid = self.geographic_mean(source)?;
        let crs = self.local_crs(&centroid)?;
        LocalFrame::new(centroid, crs)
    }
}

impl Default for Geoframe {
    fn default() -> Self {
        GeoframeBuilder::default().build()
    }
}

impl std::fmt::Debug for Geoframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Geoframe")
            .field("datum", &self.datum)
            .finish_non_exhaustive()
    }
}
