//! ECEF to topocentric SEZ coordinate transforms

mod ellipsoid;
mod transforms;

pub use ellipsoid::{E_E, EARTH, EllipsoidConstants, R_E_KM};
pub use transforms::{
    EcefPoint, EcefVector, GeodeticSolution, LATITUDE_TOLERANCE_RAD, MAX_ITERATIONS, SezVector,
    geodetic_to_ecef, sez_from_ecef, sez_from_ecef_with_solution, sez_rotation, solve_geodetic,
};
