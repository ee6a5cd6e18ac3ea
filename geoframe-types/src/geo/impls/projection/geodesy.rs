use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;

use geodesy::prelude::*;

use crate::cartesian::NewCartesianPoint2d;
use crate::error::GeoframeTypesError;
use crate::geo::traits::point::NewGeoPoint;
use crate::geo::traits::projection::Projection;

/// Point transformation backed by a [`geodesy`] operator pipeline, for example `utm zone=32 ellps=WGS84`.
///
/// The operator context is owned by the instance. Two projections never share state.
pub struct GeodesyProjection<In, Out> {
    definition: String,
    context: Minimal,
    op: OpHandle,
    phantom_in: PhantomData<In>,
    phantom_out: PhantomData<Out>,
}

impl<In, Out> GeodesyProjection<In, Out> {
    /// Creates a projection from the operator definition.
    pub fn new(definition: &str) -> Result<Self, GeoframeTypesError> {
        let mut context = Minimal::new();
        let op = context
            .op(definition)
            .map_err(|err| GeoframeTypesError::ProjectionDefinition {
                definition: definition.to_string(),
                reason: err.to_string(),
            })?;

        Ok(Self {
            definition: definition.to_string(),
            context,
            op,
            phantom_in: Default::default(),
            phantom_out: Default::default(),
        })
    }

    /// Operator definition of the projection.
    pub fn definition(&self) -> &str {
        &self.definition
    }
}

impl<In, Out> Debug for GeodesyProjection<In, Out> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeodesyProjection")
            .field("definition", &self.definition)
            .finish()
    }
}

impl<In, Out> GeodesyProjection<In, Out> {
    /// Runs the operator on a single coordinate tuple. Operator failures and non-finite results are both `None`.
    fn apply(&self, direction: Direction, coord: Coor2D) -> Option<[f64; 2]> {
        let mut data = [coord];
        self.context.apply(self.op, direction, &mut data).ok()?;

        let [a, b] = data[0].0;
        (a.is_finite() && b.is_finite()).then_some([a, b])
    }
}

impl<In: NewGeoPoint<f64>, Out: NewCartesianPoint2d<f64>> Projection
    for GeodesyProjection<In, Out>
{
    type InPoint = In;
    type OutPoint = Out;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        let [easting, northing] = self.apply(Fwd, Coor2D::geo(input.lat(), input.lon()))?;
        Some(Out::new(easting, northing))
    }

    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint> {
        // geodesy returns radians in (lon, lat) order
        let [lon, lat] = self.apply(Inv, Coor2D([input.x(), input.y()]))?;
        Some(In::latlon(lat.to_degrees(), lon.to_degrees()))
    }
}
