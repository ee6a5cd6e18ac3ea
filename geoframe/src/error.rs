//! Error types used by the crate.

use geoframe_types::error::GeoframeTypesError;
use thiserror::Error;

/// Geoframe error type.
#[derive(Debug, Error)]
pub enum GeoframeError {
    /// Input geometry does not satisfy the structural contract of the operation.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
    /// Geometry type is not accepted by the operation.
    #[error("unsupported geometry type: {0}")]
    UnsupportedGeometry(&'static str),
    /// Provided geometries contain no coordinates.
    #[error("no coordinates found in the provided geometries")]
    EmptyInput,
    /// No local projected CRS covers the given point.
    #[error("no local projected CRS found for centroid ({lon}, {lat})")]
    CrsResolution {
        /// Longitude of the point.
        lon: f64,
        /// Latitude of the point.
        lat: f64,
    },
    /// Numeric parameter is out of its domain.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// What is wrong with the value.
        reason: String,
    },
    /// Projection engine error.
    #[error(transparent)]
    Projection(#[from] GeoframeTypesError),
    /// Geometric primitive produced no usable result.
    #[error("degenerate geometry: {0}")]
    Degenerate(String),
    /// Failure inside an operation after its input was accepted.
    #[error("{operation} failed: {source}")]
    Computation {
        /// Name of the operation.
        operation: &'static str,
        /// Original cause.
        #[source]
        source: Box<GeoframeError>,
    },
}

impl GeoframeError {
    /// Wraps the error into [`GeoframeError::Computation`] for the given operation.
    pub fn during(self, operation: &'static str) -> Self {
        Self::Computation {
            operation,
            source: Box::new(self),
        }
    }

    /// Returns the innermost cause of a [`GeoframeError::Computation`] chain, or `self` for other variants.
    pub fn root_cause(&self) -> &GeoframeError {
        match self {
            Self::Computation { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Result type of the crate.
pub type Result<T> = std::result::Result<T, GeoframeError>;
