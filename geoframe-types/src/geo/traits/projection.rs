/// Conversion of points between two coordinate spaces.
///
/// Both directions return `None` if the point cannot be converted (e.g. it lies outside of the projection's domain).
pub trait Projection {
    /// Point type of the source space.
    type InPoint;
    /// Point type of the target space.
    type OutPoint;

    /// Converts a point from the source space into the target space.
    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint>;
    /// Converts a point from the target space back into the source space.
    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint>;
}

/// Projection that swaps the directions of the wrapped projection.
///
/// Turns a geographic-to-local projection into a local-to-geographic one.
#[derive(Debug, Clone)]
pub struct InvertedProjection<P> {
    inner: P,
}

impl<P: Projection> InvertedProjection<P> {
    /// Wraps the projection.
    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    /// Returns the wrapped projection.
    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: Projection> Projection for InvertedProjection<P> {
    type InPoint = P::OutPoint;
    type OutPoint = P::InPoint;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        self.inner.unproject(input)
    }

    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint> {
        self.inner.project(input)
    }
}
