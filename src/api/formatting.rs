//! Coordinate notation and structured output
//!
//! Converts decimal degrees to degrees-minutes-seconds and
//! degrees-decimal-minutes, and renders any result record as JSON.

use crate::core::GeoPoint;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a value is a latitude or a longitude
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoordinateAxis {
    Latitude,
    Longitude,
}

impl CoordinateAxis {
    /// N/S for latitude, E/W for longitude; zero takes N or E
    pub fn hemisphere(&self, value: f64) -> char {
        match (self, value < 0.0) {
            (CoordinateAxis::Latitude, false) => 'N',
            (CoordinateAxis::Latitude, true) => 'S',
            (CoordinateAxis::Longitude, false) => 'E',
            (CoordinateAxis::Longitude, true) => 'W',
        }
    }
}

/// Notation for formatted positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CoordinateFormat {
    DecimalDegrees,
    #[default]
    DegreesMinutesSeconds,
    DegreesDecimalMinutes,
}

/// Degrees, minutes and whole seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dms {
    pub degrees: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub hemisphere: char,
}

/// Degrees and minutes to three decimals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ddm {
    pub degrees: u32,
    pub minutes: f64,
    pub hemisphere: char,
}

impl Dms {
    /// Seconds are rounded to the nearest whole second, carrying into minutes and degrees.
    /// A value that rounds to zero takes the N/E hemisphere.
    pub fn from_decimal(value: f64, axis: CoordinateAxis) -> Self {
        let total_seconds = (value.abs() * 3600.0).round() as u64;

        Self {
            degrees: (total_seconds / 3600) as u32,
            minutes: ((total_seconds % 3600) / 60) as u32,
            seconds: (total_seconds % 60) as u32,
            hemisphere: axis.hemisphere(if total_seconds == 0 { 0.0 } else { value }),
        }
    }
}

impl Ddm {
    /// Minutes are rounded to three decimals, carrying into degrees
    pub fn from_decimal(value: f64, axis: CoordinateAxis) -> Self {
        let total_milli_minutes = (value.abs() * 60_000.0).round() as u64;

        Self {
            degrees: (total_milli_minutes / 60_000) as u32,
            minutes: (total_milli_minutes % 60_000) as f64 / 1000.0,
            hemisphere: axis.hemisphere(if total_milli_minutes == 0 { 0.0 } else { value }),
        }
    }
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}° {:02}' {:02}\" {}",
            self.degrees, self.minutes, self.seconds, self.hemisphere
        )
    }
}

impl fmt::Display for Ddm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}° {:06.3}' {}", self.degrees, self.minutes, self.hemisphere)
    }
}

/// Position rendered as text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedPosition {
    pub latitude: String,
    pub longitude: String,
}

impl fmt::Display for FormattedPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

/// Formats positions in a chosen notation
#[derive(Debug, Clone, Default)]
pub struct PositionFormatter {
    pub format: CoordinateFormat,
}

impl PositionFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(mut self, format: CoordinateFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format(&self, point: &GeoPoint) -> FormattedPosition {
        FormattedPosition {
            latitude: self.format_value(point.latitude, CoordinateAxis::Latitude),
            longitude: self.format_value(point.longitude, CoordinateAxis::Longitude),
        }
    }

    fn format_value(&self, value: f64, axis: CoordinateAxis) -> String {
        match self.format {
            CoordinateFormat::DecimalDegrees => format!("{:.6}°", value),
            CoordinateFormat::DegreesMinutesSeconds => Dms::from_decimal(value, axis).to_string(),
            CoordinateFormat::DegreesDecimalMinutes => Ddm::from_decimal(value, axis).to_string(),
        }
    }
}

/// JSON formatter for result records
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    /// Pretty print JSON
    pub pretty: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pretty-printing JSON formatter
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Render any serializable record
    pub fn format_json<T: Serialize>(&self, record: &T) -> Result<String, serde_json::Error> {
        if self.pretty {
            serde_json::to_string_pretty(record)
        } else {
            serde_json::to_string(record)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::route::Route;

    #[test]
    fn test_dms_conversion() {
        let dms = Dms::from_decimal(40.7, CoordinateAxis::Latitude);
        assert_eq!(dms, Dms { degrees: 40, minutes: 42, seconds: 0, hemisphere: 'N' });

        let dms = Dms::from_decimal(-74.0059, CoordinateAxis::Longitude);
        assert_eq!((dms.degrees, dms.minutes, dms.seconds, dms.hemisphere), (74, 0, 21, 'W'));
        assert_eq!(dms.to_string(), "74° 00' 21\" W");
    }

    #[test]
    fn test_dms_rounding_carries() {
        // 59.9999' rounds up to the next degree
        let dms = Dms::from_decimal(10.999999, CoordinateAxis::Latitude);
        assert_eq!((dms.degrees, dms.minutes, dms.seconds), (11, 0, 0));

        let dms = Dms::from_decimal(-0.5, CoordinateAxis::Latitude);
        assert_eq!((dms.degrees, dms.minutes, dms.seconds, dms.hemisphere), (0, 30, 0, 'S'));
    }

    #[test]
    fn test_rounded_zero_is_north_east() {
        let dms = Dms::from_decimal(-0.0000001, CoordinateAxis::Latitude);
        assert_eq!(dms.to_string(), "0° 00' 00\" N");

        let ddm = Ddm::from_decimal(-0.0000001, CoordinateAxis::Longitude);
        assert_eq!(ddm.to_string(), "0° 00.000' E");

        // One second south still reads S
        let dms = Dms::from_decimal(-1.0 / 3600.0, CoordinateAxis::Latitude);
        assert_eq!(dms.hemisphere, 'S');
    }

    #[test]
    fn test_ddm_conversion() {
        let ddm = Ddm::from_decimal(51.5, CoordinateAxis::Latitude);
        assert_eq!(ddm.degrees, 51);
        assert_eq!(ddm.minutes, 30.0);
        assert_eq!(ddm.to_string(), "51° 30.000' N");

        let ddm = Ddm::from_decimal(-0.1, CoordinateAxis::Longitude);
        assert_eq!(ddm.to_string(), "0° 06.000' W");

        let ddm = Ddm::from_decimal(12.3456789, CoordinateAxis::Longitude);
        assert_eq!(ddm.minutes, 20.741);
    }

    #[test]
    fn test_ddm_rounding_carries() {
        let ddm = Ddm::from_decimal(20.9999999, CoordinateAxis::Latitude);
        assert_eq!(ddm.degrees, 21);
        assert_eq!(ddm.minutes, 0.0);
    }

    #[test]
    fn test_position_formatter() {
        let point = GeoPoint::new(40.7, -74.0);

        let dms = PositionFormatter::new().format(&point);
        assert_eq!(dms.to_string(), "40° 42' 00\" N, 74° 00' 00\" W");

        let ddm = PositionFormatter::new()
            .with_format(CoordinateFormat::DegreesDecimalMinutes)
            .format(&point);
        assert_eq!(ddm.latitude, "40° 42.000' N");

        let decimal = PositionFormatter::new()
            .with_format(CoordinateFormat::DecimalDegrees)
            .format(&point);
        assert_eq!(decimal.longitude, "-74.000000°");
    }

    #[test]
    fn test_json_formatter() {
        let mut route = Route::new();
        route.add_waypoint(GeoPoint::new(0.0, 0.0));
        route.add_waypoint(GeoPoint::new(1.0, 0.0));

        let json = JsonFormatter::new().format_json(&route.summary()).unwrap();
        assert!(json.contains("\"leg_count\":1"));
        assert!(json.contains("\"path_mode\":\"GreatCircle\""));

        let pretty = JsonFormatter::pretty().format_json(&route.summary()).unwrap();
        assert!(pretty.contains('\n'));
    }
}
