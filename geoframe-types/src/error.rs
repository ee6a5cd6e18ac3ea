//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Error)]
pub enum GeoframeTypesError {
    /// Projection definition was rejected by the projection engine.
    #[error("invalid projection definition '{definition}': {reason}")]
    ProjectionDefinition {
        /// Operator definition that failed.
        definition: String,
        /// Message reported by the engine.
        reason: String,
    },
    /// Coordinate could not be transformed.
    #[error("failed to transform coordinate ({x}, {y})")]
    Transform {
        /// First coordinate (longitude or easting).
        x: f64,
        /// Second coordinate (latitude or northing).
        y: f64,
    },
    /// The CRS has no projection associated with it.
    #[error("CRS {0} does not define a projection")]
    NoProjection(String),
}
