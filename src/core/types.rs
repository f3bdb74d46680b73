//! Core data types for the navigation engine

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Geographic position in decimal degrees
///
/// Latitude is positive north, longitude positive east. Values are not
/// range-checked here; see `validation::data` for opt-in checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Unit vector from the Earth's centre through this point (x towards 0°E, z towards the north pole)
    pub fn to_unit_vector(&self) -> Vector3<f64> {
        let lat = self.latitude.to_radians();
        let lon = self.longitude.to_radians();
        Vector3::new(lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin())
    }

    /// Inverse of [`GeoPoint::to_unit_vector`]; the vector need not be normalised
    pub fn from_unit_vector(v: &Vector3<f64>) -> Self {
        let horizontal = (v.x * v.x + v.y * v.y).sqrt();
        Self {
            latitude: v.z.atan2(horizontal).to_degrees(),
            longitude: v.y.atan2(v.x).to_degrees(),
        }
    }
}

/// Which path between waypoints is displayed and aggregated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PathMode {
    /// Orthodromic (shortest) path
    #[default]
    GreatCircle,
    /// Loxodromic (constant course) path
    Rhumb,
}

/// Normalise a bearing into [0, 360)
pub fn normalize_bearing(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Wrap a longitude into [-180, 180]
pub fn wrap_longitude(degrees: f64) -> f64 {
    if (-180.0..=180.0).contains(&degrees) {
        return degrees;
    }
    (degrees + 180.0).rem_euclid(360.0) - 180.0
}

/// Normalise a signed angle into (-180, 180]
pub fn normalize_signed(degrees: f64) -> f64 {
    let wrapped = normalize_bearing(degrees);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_bearing() {
        assert_eq!(normalize_bearing(0.0), 0.0);
        assert_eq!(normalize_bearing(360.0), 0.0);
        assert_eq!(normalize_bearing(-90.0), 270.0);
        assert_eq!(normalize_bearing(725.0), 5.0);
        assert!(normalize_bearing(-1e-18) < 360.0);
    }

    #[test]
    fn test_wrap_longitude() {
        assert_eq!(wrap_longitude(179.5), 179.5);
        assert_eq!(wrap_longitude(-180.0), -180.0);
        assert!((wrap_longitude(190.0) - -170.0).abs() < 1e-12);
        assert!((wrap_longitude(-190.0) - 170.0).abs() < 1e-12);
        assert!((wrap_longitude(540.0).abs() - 180.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_signed() {
        assert_eq!(normalize_signed(190.0), -170.0);
        assert_eq!(normalize_signed(-10.0), -10.0);
        assert_eq!(normalize_signed(180.0), 180.0);
    }

    #[test]
    fn test_unit_vector_round_trip() {
        let point = GeoPoint::new(40.7, -74.0);
        let back = GeoPoint::from_unit_vector(&point.to_unit_vector());

        assert!((back.latitude - point.latitude).abs() < 1e-9);
        assert!((back.longitude - point.longitude).abs() < 1e-9);
    }

    #[test]
    fn test_default_path_mode() {
        assert_eq!(PathMode::default(), PathMode::GreatCircle);
    }
}
