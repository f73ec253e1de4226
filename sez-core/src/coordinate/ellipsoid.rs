/// Reference ellipsoid parameters, in kilometres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipsoidConstants {
    /// Equatorial radius (km)
    pub r_e_km: f64,
    /// First eccentricity (dimensionless)
    pub e_e: f64,
}

impl EllipsoidConstants {
    pub const fn new(r_e_km: f64, e_e: f64) -> Self {
        Self { r_e_km, e_e }
    }

    /// First eccentricity squared
    pub const fn e_e2(&self) -> f64 {
        self.e_e * self.e_e
    }

    /// Radius of curvature in the prime vertical at geodetic latitude `lat_rad`
    pub fn prime_vertical_radius(&self, lat_rad: f64) -> f64 {
        let sin_lat = lat_rad.sin();
        self.r_e_km / (1.0 - self.e_e2() * (sin_lat * sin_lat)).sqrt()
    }
}

pub const R_E_KM: f64 = 6378.1363;
pub const E_E: f64 = 0.081819221456;

/// The single reference ellipsoid used by every transform in this crate.
pub const EARTH: EllipsoidConstants = EllipsoidConstants::new(R_E_KM, E_E);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_earth_constants() {
        assert_relative_eq!(EARTH.r_e_km, 6378.1363);
        assert_relative_eq!(EARTH.e_e, 0.081819221456);
        assert_relative_eq!(EARTH.e_e2(), 0.006_694_385, epsilon = 1e-12);
    }

    #[test]
    fn test_prime_vertical_radius_equator() {
        // No flattening correction on the equator
        assert_relative_eq!(EARTH.prime_vertical_radius(0.0), R_E_KM);
    }

    #[test]
    fn test_prime_vertical_radius_pole() {
        let n = EARTH.prime_vertical_radius(std::f64::consts::FRAC_PI_2);
        assert_relative_eq!(n, R_E_KM / (1.0 - EARTH.e_e2()).sqrt(), epsilon = 1e-9);
        assert!(n > R_E_KM);
    }
}
