//! Opt-in input validation
//!
//! The computation modules assume well-formed input and never call these.
//! Form handlers and other callers use them before handing values over.

use crate::core::GeoPoint;
use crate::validation::error::{NavigationError, NavigationResult};

/// Range checks for caller-supplied values
pub struct CoordinateValidator;

impl CoordinateValidator {
    /// Latitude in [-90, 90] and longitude in [-180, 180]
    pub fn validate_point(point: &GeoPoint) -> NavigationResult<()> {
        if !point.latitude.is_finite() {
            return Err(NavigationError::NonFinite {
                parameter: "latitude".to_string(),
            });
        }
        if !point.longitude.is_finite() {
            return Err(NavigationError::NonFinite {
                parameter: "longitude".to_string(),
            });
        }

        if !(-90.0..=90.0).contains(&point.latitude) {
            return Err(NavigationError::InvalidLatitude {
                value: point.latitude,
            });
        }

        if !(-180.0..=180.0).contains(&point.longitude) {
            return Err(NavigationError::InvalidLongitude {
                value: point.longitude,
            });
        }

        Ok(())
    }

    /// Validate every point, reporting the first failure
    pub fn validate_points(points: &[GeoPoint]) -> NavigationResult<()> {
        points.iter().try_for_each(Self::validate_point)
    }

    /// Speed through the water must be finite and positive
    pub fn validate_speed(speed_kts: f64) -> NavigationResult<()> {
        if !speed_kts.is_finite() {
            return Err(NavigationError::NonFinite {
                parameter: "speed_kts".to_string(),
            });
        }
        if speed_kts <= 0.0 {
            return Err(NavigationError::invalid_parameter(
                "speed_kts",
                speed_kts,
                "speed must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Water depth must be finite and positive
    pub fn validate_depth(depth_m: f64) -> NavigationResult<()> {
        if !depth_m.is_finite() {
            return Err(NavigationError::NonFinite {
                parameter: "depth_m".to_string(),
            });
        }
        if depth_m <= 0.0 {
            return Err(NavigationError::invalid_parameter(
                "depth_m",
                depth_m,
                "depth must be greater than zero",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_point() {
        assert!(CoordinateValidator::validate_point(&GeoPoint::new(40.7, -74.0)).is_ok());
        assert!(CoordinateValidator::validate_point(&GeoPoint::new(90.0, 180.0)).is_ok());
        assert!(CoordinateValidator::validate_point(&GeoPoint::new(-90.0, -180.0)).is_ok());
    }

    #[test]
    fn test_out_of_range_point() {
        assert_eq!(
            CoordinateValidator::validate_point(&GeoPoint::new(91.0, 0.0)),
            Err(NavigationError::InvalidLatitude { value: 91.0 })
        );
        assert_eq!(
            CoordinateValidator::validate_point(&GeoPoint::new(0.0, -180.5)),
            Err(NavigationError::InvalidLongitude { value: -180.5 })
        );
    }

    #[test]
    fn test_non_finite_point() {
        let result = CoordinateValidator::validate_point(&GeoPoint::new(f64::NAN, 0.0));
        assert!(matches!(result, Err(NavigationError::NonFinite { .. })));
    }

    #[test]
    fn test_validate_points_reports_first_failure() {
        let points = [
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 200.0),
            GeoPoint::new(95.0, 0.0),
        ];
        assert_eq!(
            CoordinateValidator::validate_points(&points),
            Err(NavigationError::InvalidLongitude { value: 200.0 })
        );
    }

    #[test]
    fn test_speed_and_depth() {
        assert!(CoordinateValidator::validate_speed(12.0).is_ok());
        assert!(CoordinateValidator::validate_speed(0.0).is_err());
        assert!(CoordinateValidator::validate_speed(f64::INFINITY).is_err());

        assert!(CoordinateValidator::validate_depth(10.0).is_ok());
        assert!(CoordinateValidator::validate_depth(-1.0).is_err());
    }
}
