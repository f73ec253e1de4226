use nalgebra::{Matrix3, RowVector3, Vector3};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;
use std::ops::Sub;
use tracing::{debug, trace};

use super::ellipsoid::EARTH;
use crate::error::{CoordinateError, Result};

/// Hard cap on latitude refinement passes
pub const MAX_ITERATIONS: usize = 5;

/// Refinement stops once successive latitudes differ by no more than this (radians)
pub const LATITUDE_TOLERANCE_RAD: f64 = 1e-6;

/// Displacement between two ECEF positions (km)
pub type EcefVector = Vector3<f64>;

/// ECEF position (Earth-Centered, Earth-Fixed), kilometres
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EcefPoint {
    pub x_km: f64,
    pub y_km: f64,
    pub z_km: f64,
}

impl EcefPoint {
    pub const fn new(x_km: f64, y_km: f64, z_km: f64) -> Self {
        Self { x_km, y_km, z_km }
    }

    /// Create a point, rejecting NaN and infinite components
    pub fn try_new(x_km: f64, y_km: f64, z_km: f64) -> Result<Self> {
        for (axis, value) in [("x", x_km), ("y", y_km), ("z", z_km)] {
            if !value.is_finite() {
                return Err(CoordinateError::NonFinite { axis, value }.into());
            }
        }
        Ok(Self::new(x_km, y_km, z_km))
    }

    pub fn as_vector(&self) -> EcefVector {
        Vector3::new(self.x_km, self.y_km, self.z_km)
    }

    /// Distance from the polar axis (km)
    pub fn polar_axis_distance_km(&self) -> f64 {
        (self.x_km * self.x_km + self.y_km * self.y_km).sqrt()
    }
}

impl Sub for EcefPoint {
    type Output = EcefVector;

    fn sub(self, origin: EcefPoint) -> EcefVector {
        Vector3::new(
            self.x_km - origin.x_km,
            self.y_km - origin.y_km,
            self.z_km - origin.z_km,
        )
    }
}

/// Topocentric South-East-Zenith displacement, kilometres
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SezVector {
    pub s_km: f64,
    pub e_km: f64,
    pub z_km: f64,
}

impl SezVector {
    /// Straight-line distance from the origin (km)
    pub fn range_km(&self) -> f64 {
        (self.s_km * self.s_km + self.e_km * self.e_km + self.z_km * self.z_km).sqrt()
    }
}

impl From<Vector3<f64>> for SezVector {
    fn from(v: Vector3<f64>) -> Self {
        Self {
            s_km: v.x,
            e_km: v.y,
            z_km: v.z,
        }
    }
}

/// Geodetic position of an ECEF origin on the reference ellipsoid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeodeticSolution {
    pub lat_rad: f64,
    pub lon_rad: f64,
    /// Height above the ellipsoid (km)
    pub hae_km: f64,
    /// Prime vertical radius of curvature at `lat_rad` (km)
    pub c_e_km: f64,
    /// Refinement passes executed, in `1..=MAX_ITERATIONS`
    pub iterations: usize,
}

impl GeodeticSolution {
    pub fn lat_deg(&self) -> f64 {
        self.lat_rad.to_degrees()
    }

    pub fn lon_deg(&self) -> f64 {
        self.lon_rad.to_degrees()
    }
}

/// Solve for the geodetic latitude, longitude and height of an ECEF point.
///
/// Longitude is closed form. Latitude starts from the geocentric latitude and is
/// refined by fixed-point iteration, at least once and at most `MAX_ITERATIONS`
/// times. Degenerate points are not rejected: the Earth's centre yields NaN, and a
/// point on the polar axis gets `atan(±inf)`, i.e. a latitude of ±pi/2.
pub fn solve_geodetic(origin: &EcefPoint) -> GeodeticSolution {
    let lon_rad = origin.y_km.atan2(origin.x_km);
    let r_lon_km = origin.polar_axis_distance_km();
    let e_e2 = EARTH.e_e2();

    let mut lat_rad = (origin.z_km / origin.as_vector().norm()).asin();
    let mut c_e_km;
    let mut iterations = 0;

    loop {
        c_e_km = EARTH.prime_vertical_radius(lat_rad);
        let prev_lat_rad = lat_rad;
        lat_rad = ((origin.z_km + c_e_km * e_e2 * lat_rad.sin()) / r_lon_km).atan();
        iterations += 1;

        let delta = (lat_rad - prev_lat_rad).abs();
        trace!(iterations, lat_rad, delta, "latitude refinement pass");

        // A NaN delta also ends the loop
        let keep_refining = delta > LATITUDE_TOLERANCE_RAD && iterations < MAX_ITERATIONS;
        if !keep_refining {
            break;
        }
    }

    let hae_km = r_lon_km / lat_rad.cos() - c_e_km;
    debug!(lat_rad, lon_rad, hae_km, iterations, "geodetic solution");

    GeodeticSolution {
        lat_rad,
        lon_rad,
        hae_km,
        c_e_km,
        iterations,
    }
}

/// Rotation taking ECEF displacements into the SEZ frame at `solution`.
///
/// Rows are the south, east and zenith unit vectors expressed in ECEF.
pub fn sez_rotation(solution: &GeodeticSolution) -> Matrix3<f64> {
    let (sin_lat, cos_lat) = solution.lat_rad.sin_cos();
    let (sin_lon, cos_lon) = solution.lon_rad.sin_cos();

    Matrix3::from_rows(&[
        RowVector3::new(sin_lat * cos_lon, sin_lat * sin_lon, -cos_lat),
        RowVector3::new(-sin_lon, cos_lon, 0.0),
        RowVector3::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat),
    ])
}

/// Convert an ECEF target into SEZ coordinates relative to an ECEF origin
pub fn sez_from_ecef(origin: EcefPoint, target: EcefPoint) -> SezVector {
    sez_from_ecef_with_solution(origin, target).0
}

/// Same as [`sez_from_ecef`], also returning the origin's geodetic solution
pub fn sez_from_ecef_with_solution(
    origin: EcefPoint,
    target: EcefPoint,
) -> (SezVector, GeodeticSolution) {
    let d = target - origin;
    let solution = solve_geodetic(&origin);
    let (sin_lat, cos_lat) = solution.lat_rad.sin_cos();
    let (sin_lon, cos_lon) = solution.lon_rad.sin_cos();

    // Rows of `sez_rotation`, each product grouped left to right
    let sez = SezVector {
        s_km: d.x * sin_lat * cos_lon + d.y * sin_lat * sin_lon - d.z * cos_lat,
        e_km: d.y * cos_lon - d.x * sin_lon,
        z_km: d.x * cos_lat * cos_lon + d.y * cos_lat * sin_lon + d.z * sin_lat,
    };

    (sez, solution)
}

/// Convert geodetic latitude/longitude (radians) and height (km) to ECEF
pub fn geodetic_to_ecef(lat_rad: f64, lon_rad: f64, hae_km: f64) -> Result<EcefPoint> {
    if !(-FRAC_PI_2..=FRAC_PI_2).contains(&lat_rad) {
        return Err(CoordinateError::InvalidLatitude(lat_rad).into());
    }

    let (sin_lat, cos_lat) = lat_rad.sin_cos();
    let (sin_lon, cos_lon) = lon_rad.sin_cos();
    let n = EARTH.prime_vertical_radius(lat_rad);
    let e_e2 = EARTH.e_e2();

    Ok(EcefPoint::new(
        (n + hae_km) * cos_lat * cos_lon,
        (n + hae_km) * cos_lat * sin_lon,
        (n * (1.0 - e_e2) + hae_km) * sin_lat,
    ))
}
