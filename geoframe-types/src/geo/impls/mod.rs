//! Implementations of the geographic traits.

pub mod point;
pub mod projection;

pub use point::GeoPoint2d;
pub use projection::GeodesyProjection;
