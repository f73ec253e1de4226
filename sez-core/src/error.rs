use thiserror::Error;

/// Errors raised at the boundaries of the ECEF to SEZ transform
#[derive(Error, Debug)]
pub enum SezError {
    #[error("Coordinate transform error: {0}")]
    CoordinateTransform(#[from] CoordinateError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

#[derive(Error, Debug)]
pub enum CoordinateError {
    #[error("Non-finite {axis} component: {value}")]
    NonFinite { axis: &'static str, value: f64 },

    #[error("Invalid latitude: {0} rad (must be -pi/2 to pi/2)")]
    InvalidLatitude(f64),
}

pub type Result<T> = std::result::Result<T, SezError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_error_display() {
        let err = CoordinateError::NonFinite {
            axis: "x",
            value: f64::INFINITY,
        };
        assert_eq!(err.to_string(), "Non-finite x component: inf");

        let err = CoordinateError::InvalidLatitude(2.0);
        assert_eq!(err.to_string(), "Invalid latitude: 2 rad (must be -pi/2 to pi/2)");
    }

    #[test]
    fn test_sez_error_from_coordinate_error() {
        let coord_err = CoordinateError::InvalidLatitude(2.0);
        let sez_err: SezError = coord_err.into();
        assert!(matches!(sez_err, SezError::CoordinateTransform(_)));
        assert_eq!(
            sez_err.to_string(),
            "Coordinate transform error: Invalid latitude: 2 rad (must be -pi/2 to pi/2)"
        );
    }

    #[test]
    fn test_sez_error_invalid_input() {
        let err = SezError::InvalidInput("expected 6 values, got 5".to_string());
        assert_eq!(err.to_string(), "Invalid input: expected 6 values, got 5");
    }

    #[test]
    fn test_sez_error_parse() {
        let err = SezError::Parse("'abc' is not a number".to_string());
        assert_eq!(err.to_string(), "Parse error: 'abc' is not a number");
    }
}
