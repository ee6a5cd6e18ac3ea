//! Implementations of the [`Projection`](crate::geo::Projection) trait.
mod geodesy;

pub use geodesy::GeodesyProjection;
