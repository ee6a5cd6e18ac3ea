use geoframe_types::geo::Datum;

use crate::geoframe::Geoframe;
use crate::registry::{CachedRegistry, CrsRegistry, UtmRegistry};

/// Convenience type to initialize a [`Geoframe`].
///
/// ```
/// use geoframe::{Geoframe, GeoframeBuilder};
/// use geoframe_types::geo::Datum;
///
/// let geoframe = GeoframeBuilder::default()
///     .with_datum(Datum::GRS80)
///     .with_registry_cache(256)
///     .build();
///
/// assert_eq!(geoframe.datum(), Datum::GRS80);
/// ```
#[derive(Default)]
pub struct GeoframeBuilder {
    datum: Option<Datum>,
    registry: Option<Box<dyn CrsRegistry>>,
    cache_capacity: Option<usize>,
}

impl GeoframeBuilder {
    /// Sets the datum used for the geographic mean and the local projections.
    ///
    /// If no custom registry is set, the default UTM table is created on this datum.
    ///
    /// Defaults to [`Datum::WGS84`].
    pub fn with_datum(mut self, datum: Datum) -> Self {
        self.datum = Some(datum);
        self
    }

    /// Sets the registry local coordinate systems are selected from.
    ///
    /// Defaults to [`UtmRegistry`] on the configured datum.
    pub fn with_registry(mut self, registry: impl CrsRegistry + 'static) -> Self {
        self.registry = Some(Box::new(registry));
        self
    }

    /// Memoizes registry lookups, keeping up to `capacity` results.
    ///
    /// Lookups are keyed by the point coordinates rounded to 1e-7 degrees. Disabled by default.
    pub fn with_registry_cache(mut self, capacity: usize) -> Self {
        self.cache_capacity = Some(capacity);
        self
    }

    /// Consumes the builder and creates the [`Geoframe`].
    pub fn build(self) -> Geoframe {
        let datum = self.datum.unwrap_or(Datum::WGS84);
        let registry = self
            .registry
            .unwrap_or_else(|| Box::new(UtmRegistry::new(datum)));

        let registry: Box<dyn CrsRegistry> = match self.cache_capacity {
            Some(capacity) => Box::new(CachedRegistry::new(registry, capacity)),
            None => registry,
        };

        Geoframe { datum, registry }
    }
}
