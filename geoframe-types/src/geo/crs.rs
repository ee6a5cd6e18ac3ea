use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::cartesian::NewCartesianPoint2d;
use crate::error::GeoframeTypesError;
use crate::geo::datum::Datum;
use crate::geo::impls::projection::GeodesyProjection;
use crate::geo::traits::point::NewGeoPoint;

/// Coordinate reference system: a datum plus a projection.
#[derive(Debug, Clone, PartialEq)]
pub struct Crs {
    datum: Datum,
    projection_type: ProjectionType,
}

/// Projection of a [`Crs`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ProjectionType {
    /// Unprojected geographic coordinates.
    None,
    /// Universal Transverse Mercator zone.
    Utm {
        /// Zone number, `1..=60`. Zone 1 starts at 180°W, every zone is 6° wide.
        zone: u8,
        /// Hemisphere of the zone.
        hemisphere: Hemisphere,
    },
}

/// Hemisphere of a UTM zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hemisphere {
    /// Northern hemisphere, latitude >= 0.
    North,
    /// Southern hemisphere, latitude < 0. Northings are offset by 10 000 km.
    South,
}

impl Crs {
    /// Geographic WGS84 coordinates (EPSG:4326).
    pub const WGS84: Crs = Crs {
        datum: Datum::WGS84,
        projection_type: ProjectionType::None,
    };

    /// Creates a new CRS.
    pub fn new(datum: Datum, projection_type: ProjectionType) -> Self {
        Self {
            datum,
            projection_type,
        }
    }

    /// WGS84 UTM zone. Returns `None` if the zone number is not in `1..=60`.
    pub fn utm(zone: u8, hemisphere: Hemisphere) -> Option<Self> {
        Self::utm_with_datum(zone, hemisphere, Datum::WGS84)
    }

    /// UTM zone on the given datum. Returns `None` if the zone number is not in `1..=60`.
    pub fn utm_with_datum(zone: u8, hemisphere: Hemisphere, datum: Datum) -> Option<Self> {
        if !(1..=60).contains(&zone) {
            return None;
        }

        Some(Self {
            datum,
            projection_type: ProjectionType::Utm { zone, hemisphere },
        })
    }

    /// Datum of the CRS.
    pub fn datum(&self) -> Datum {
        self.datum
    }

    /// Projection of the CRS.
    pub fn projection_type(&self) -> ProjectionType {
        self.projection_type
    }

    /// EPSG code of the CRS, if it has one. Only WGS84 based systems are registered.
    pub fn epsg(&self) -> Option<u32> {
        if self.datum != Datum::WGS84 {
            return None;
        }

        match self.projection_type {
            ProjectionType::None => Some(4326),
            ProjectionType::Utm {
                zone,
                hemisphere: Hemisphere::North,
            } => Some(32600 + zone as u32),
            ProjectionType::Utm {
                zone,
                hemisphere: Hemisphere::South,
            } => Some(32700 + zone as u32),
        }
    }

    /// Longitude of the central meridian of the projection in degrees.
    pub fn central_meridian(&self) -> Option<f64> {
        match self.projection_type {
            ProjectionType::Utm { zone, .. } => Some(zone as f64 * 6.0 - 183.0),
            ProjectionType::None => None,
        }
    }

    /// Operator definition of the projection for the `geodesy` engine.
    pub fn proj_definition(&self) -> Option<String> {
        match self.projection_type {
            ProjectionType::Utm { zone, hemisphere } => {
                let south = match hemisphere {
                    Hemisphere::North => "",
                    Hemisphere::South => " south",
                };
                Some(format!(
                    "utm zone={zone}{south} ellps={}",
                    self.datum.name()
                ))
            }
            ProjectionType::None => None,
        }
    }

    /// Creates the projection from geographic coordinates into this CRS.
    pub fn get_projection<In, Out>(&self) -> Result<GeodesyProjection<In, Out>, GeoframeTypesError>
    where
        In: NewGeoPoint,
        Out: NewCartesianPoint2d,
    {
        let definition = self
            .proj_definition()
            .ok_or_else(|| GeoframeTypesError::NoProjection(self.to_string()))?;
        GeodesyProjection::new(&definition)
    }
}

impl Display for Crs {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match (self.epsg(), self.projection_type) {
            (Some(code), _) => write!(f, "EPSG:{code}"),
            (None, ProjectionType::None) => write!(f, "geographic ({})", self.datum.name()),
            (None, ProjectionType::Utm { zone, hemisphere }) => {
                write!(f, "UTM {zone} {hemisphere:?} ({})", self.datum.name())
            }
        }
    }
}
