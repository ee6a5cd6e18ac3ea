/// Reference ellipsoid of a geodetic datum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Datum {
    name: &'static str,
    semimajor: f64,
    inv_flattening: f64,
}

impl Datum {
    /// World Geodetic System 1984.
    pub const WGS84: Self = Datum {
        name: "WGS84",
        semimajor: 6_378_137.0,
        inv_flattening: 298.257223563,
    };

    /// Geodetic Reference System 1980.
    pub const GRS80: Self = Datum {
        name: "GRS80",
        semimajor: 6_378_137.0,
        inv_flattening: 298.257222101,
    };

    /// Ellipsoid name, as understood by the projection engine.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Semimajor axis in meters.
    pub fn semimajor(&self) -> f64 {
        self.semimajor
    }

    /// Inverse flattening.
    pub fn inv_flattening(&self) -> f64 {
        self.inv_flattening
    }

    /// Flattening.
    pub fn flattening(&self) -> f64 {
        1.0 / self.inv_flattening
    }

    /// First eccentricity squared.
    pub fn eccentricity_sq(&self) -> f64 {
        let f = self.flattening();
        f * (2.0 - f)
    }

    /// Converts geodetic latitude into authalic latitude (both in radians).
    ///
    /// Authalic latitude is the latitude on a sphere of equal surface area, so unit vectors built from it preserve
    /// the relative weight of areas on the ellipsoid.
    pub fn authalic_latitude(&self, lat: f64) -> f64 {
        let e2 = self.eccentricity_sq();
        if e2 == 0.0 {
            return lat;
        }

        let q = self.q(lat.sin());
        let q_pole = self.q(1.0);
        (q / q_pole).clamp(-1.0, 1.0).asin()
    }

    /// Converts authalic latitude back into geodetic latitude (both in radians).
    pub fn geodetic_latitude(&self, authalic: f64) -> f64 {
        let e2 = self.eccentricity_sq();
        let e4 = e2 * e2;
        let e6 = e4 * e2;

        authalic
            + (e2 / 3.0 + 31.0 * e4 / 180.0 + 517.0 * e6 / 5040.0) * (2.0 * authalic).sin()
            + (23.0 * e4 / 360.0 + 251.0 * e6 / 3780.0) * (4.0 * authalic).sin()
            + (761.0 * e6 / 45360.0) * (6.0 * authalic).sin()
    }

    fn q(&self, sin_lat: f64) -> f64 {
        let e2 = self.eccentricity_sq();
        let e = e2.sqrt();
        let e_sin = e * sin_lat;

        (1.0 - e2)
            * (sin_lat / (1.0 - e_sin * e_sin)
                - (1.0 / (2.0 * e)) * ((1.0 - e_sin) / (1.0 + e_sin)).ln())
    }
}

impl Default for Datum {
    fn default() -> Self {
        Self::WGS84
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn authalic_latitude_is_symmetric_and_fixed_at_poles() {
        let datum = Datum::WGS84;
        assert_abs_diff_eq!(datum.authalic_latitude(0.0), 0.0);
        assert_abs_diff_eq!(
            datum.authalic_latitude(std::f64::consts::FRAC_PI_2),
            std::f64::consts::FRAC_PI_2,
            epsilon = 1e-12
        );
        let lat = 0.7;
        assert_abs_diff_eq!(
            datum.authalic_latitude(-lat),
            -datum.authalic_latitude(lat),
            epsilon = 1e-15
        );
    }

    #[test]
    fn authalic_latitude_is_below_geodetic() {
        let datum = Datum::WGS84;
        let lat = 45f64.to_radians();
        let authalic = datum.authalic_latitude(lat);
        assert!(authalic < lat);
        // Maximum difference between the two latitudes is about 0.128 degrees
        assert_abs_diff_eq!((lat - authalic).to_degrees(), 0.128, epsilon = 0.001);
    }

    #[test]
    fn authalic_round_trip() {
        let datum = Datum::WGS84;
        for lat in [-89.0, -60.0, -10.0, 0.0, 33.3, 51.5, 88.0] {
            let lat = f64::to_radians(lat);
            let restored = datum.geodetic_latitude(datum.authalic_latitude(lat));
            assert_abs_diff_eq!(restored, lat, epsilon = 1e-8);
        }
    }
}
