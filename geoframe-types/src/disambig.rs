use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;

use geo_types::{Geometry, LineString, MultiPolygon, Polygon};

use crate::geometry_type::{AmbiguousSpace, CartesianSpace2d, GeoSpace2d, GeometryType};

/// Wrapper type that disambiguates coordinate space for generic geometries.
///
/// See [`Disambiguate`] trait documentation for details.
pub struct Disambig<T, Space> {
    inner: T,
    space: PhantomData<Space>,
}

/// Geometry in geographic coordinates (`x` is longitude, `y` is latitude, both in degrees).
pub type Geo<T> = Disambig<T, GeoSpace2d>;
/// Geometry in local projected coordinates (meters).
pub type Local<T> = Disambig<T, CartesianSpace2d>;

/// Polygon in geographic coordinates.
pub type GeoPolygon = Geo<Polygon<f64>>;
/// Multipolygon in geographic coordinates.
pub type GeoMultiPolygon = Geo<MultiPolygon<f64>>;
/// Line string (path) in geographic coordinates.
pub type GeoLineString = Geo<LineString<f64>>;
/// Any geometry in geographic coordinates.
pub type GeoGeometry = Geo<Geometry<f64>>;
/// Polygon in local projected coordinates.
pub type LocalPolygon = Local<Polygon<f64>>;
/// Multipolygon in local projected coordinates.
pub type LocalMultiPolygon = Local<MultiPolygon<f64>>;

impl<T, Space> Disambig<T, Space> {
    /// Creates a new instance.
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            space: Default::default(),
        }
    }

    /// Returns the wrapped geometry.
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Unwraps the geometry, dropping the coordinate space information.
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Applies `f` to the wrapped geometry, keeping it in the same coordinate space.
    pub fn map<U>(&self, f: impl FnOnce(&T) -> U) -> Disambig<U, Space> {
        Disambig::new(f(&self.inner))
    }
}

impl<T: Clone, Space> Clone for Disambig<T, Space> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            space: Default::default(),
        }
    }
}

impl<T: PartialEq, Space> PartialEq for Disambig<T, Space> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T: Debug, Space> Debug for Disambig<T, Space> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Disambig")
            .field(&self.inner)
            .field(&std::any::type_name::<Space>())
            .finish()
    }
}

impl<T: GeometryType, Space> GeometryType for Disambig<T, Space> {
    type Space = Space;
}

/// A trait used to convert a geometry with no specified coordinate space into one of the specific coordinate spaces.
/// This trait is auto-implemented for all types, that implement `GeometryType<Space = AmbiguousSpace>` trait.
///
/// ```
/// use geo_types::polygon;
/// use geoframe_types::{Disambiguate, GeoPolygon};
///
/// let polygon: GeoPolygon = polygon![(x: 0.0, y: 0.0), (x: 0.0, y: 1.0), (x: 1.0, y: 1.0)].to_geo2d();
/// assert_eq!(polygon.inner().exterior().0.len(), 4);
/// ```
pub trait Disambiguate {
    /// Specifies that the geometry is in geographic coordinates.
    fn to_geo2d(self) -> Disambig<Self, GeoSpace2d>
    where
        Self: Sized,
    {
        Disambig::new(self)
    }

    /// Specifies that the geometry is in cartesian coordinates.
    fn to_cartesian2d(self) -> Disambig<Self, CartesianSpace2d>
    where
        Self: Sized,
    {
        Disambig::new(self)
    }
}

impl<T: GeometryType<Space = AmbiguousSpace>> Disambiguate for T {}
