//! Compass error reduction
//!
//! Variation and deviation are signed east-positive. Compass + total error
//! gives the true heading; a gyro reading, when supplied, is compared
//! against it to give the gyro error.

use crate::core::{normalize_bearing, normalize_signed};
use serde::{Deserialize, Serialize};

/// Readings for a compass error check
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompassReadings {
    /// Magnetic compass heading (degrees)
    pub compass_heading: f64,
    /// Magnetic variation, east positive (degrees)
    pub variation: f64,
    /// Compass deviation, east positive (degrees)
    pub deviation: f64,
    /// Gyro heading at the same instant, if read
    pub gyro_heading: Option<f64>,
}

/// Direction of a gyro error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GyroErrorSense {
    /// Gyro reads more than true
    High,
    /// Gyro reads less than true
    Low,
    /// Gyro agrees with true
    Zero,
}

/// Reduced headings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompassError {
    /// Variation + deviation (degrees, east positive)
    pub total_error: f64,
    pub magnetic_heading: f64,
    pub true_heading: f64,
    /// Gyro − true heading in (-180, 180]; only present with a gyro reading
    pub gyro_error: Option<f64>,
    pub gyro_error_sense: Option<GyroErrorSense>,
}

impl CompassReadings {
    pub fn new(compass_heading: f64, variation: f64, deviation: f64) -> Self {
        Self {
            compass_heading,
            variation,
            deviation,
            gyro_heading: None,
        }
    }

    pub fn with_gyro(mut self, gyro_heading: f64) -> Self {
        self.gyro_heading = Some(gyro_heading);
        self
    }

    pub fn reduce(&self) -> CompassError {
        let total_error = self.variation + self.deviation;
        let true_heading = normalize_bearing(self.compass_heading + total_error);

        let gyro_error = self
            .gyro_heading
            .map(|gyro| normalize_signed(gyro - (self.compass_heading + total_error)));

        let gyro_error_sense = gyro_error.map(|error| {
            if error > 0.0 {
                GyroErrorSense::High
            } else if error < 0.0 {
                GyroErrorSense::Low
            } else {
                GyroErrorSense::Zero
            }
        });

        CompassError {
            total_error,
            magnetic_heading: normalize_bearing(self.compass_heading + self.deviation),
            true_heading,
            gyro_error,
            gyro_error_sense,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_east_errors_add() {
        let error = CompassReadings::new(100.0, 5.0, 2.0).reduce();

        assert_eq!(error.total_error, 7.0);
        assert_eq!(error.magnetic_heading, 102.0);
        assert_eq!(error.true_heading, 107.0);
        assert_eq!(error.gyro_error, None);
        assert_eq!(error.gyro_error_sense, None);
    }

    #[test]
    fn test_west_errors_wrap_through_north() {
        let error = CompassReadings::new(3.0, -4.0, -1.0).reduce();

        assert_eq!(error.total_error, -5.0);
        assert_eq!(error.true_heading, 358.0);
    }

    #[test]
    fn test_gyro_error_high_and_low() {
        let high = CompassReadings::new(100.0, 5.0, 2.0).with_gyro(109.0).reduce();
        assert_eq!(high.gyro_error, Some(2.0));
        assert_eq!(high.gyro_error_sense, Some(GyroErrorSense::High));

        let low = CompassReadings::new(100.0, 5.0, 2.0).with_gyro(106.0).reduce();
        assert_eq!(low.gyro_error, Some(-1.0));
        assert_eq!(low.gyro_error_sense, Some(GyroErrorSense::Low));

        let exact = CompassReadings::new(100.0, 5.0, 2.0).with_gyro(107.0).reduce();
        assert_eq!(exact.gyro_error, Some(0.0));
        assert_eq!(exact.gyro_error_sense, Some(GyroErrorSense::Zero));
    }

    #[test]
    fn test_gyro_error_across_north() {
        let error = CompassReadings::new(358.0, 0.0, 0.0).with_gyro(1.0).reduce();
        assert_eq!(error.gyro_error, Some(3.0));
    }
}
