pub mod coordinate;
pub mod error;

pub use coordinate::{
    EcefPoint, GeodeticSolution, SezVector, geodetic_to_ecef, sez_from_ecef,
    sez_from_ecef_with_solution, solve_geodetic,
};
pub use error::{CoordinateError, Result, SezError};
