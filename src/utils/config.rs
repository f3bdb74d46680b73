use crate::algorithms::route::{Route, TravelTime};
use crate::core::{
    GeoPoint, DEFAULT_DENSIFY_SEGMENTS, DEFAULT_ROUTE_CAPACITY, MIN_FLUID_GM_M,
    SQUAT_CRITICAL_M, SQUAT_ELEVATED_M,
};
use crate::environment::squat::SquatEstimate;
use crate::hull::stability::{StabilityAssessment, StabilityCondition};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Route planner settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Maximum number of waypoints in a route
    pub waypoint_capacity: usize,
    /// Segments per leg when densifying great circles for display
    pub densify_segments: usize,
    /// Speed used for passage time when the caller gives none (knots)
    pub default_speed_kts: f64,
}

/// Safety thresholds for hull and environment checks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyConfig {
    /// Minimum acceptable fluid GM (meters)
    pub min_fluid_gm_m: f64,
    /// Squat above this is elevated (meters)
    pub squat_elevated_m: f64,
    /// Squat above this is critical (meters)
    pub squat_critical_m: f64,
}

/// Engine-wide configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    pub planner: PlannerConfig,
    pub safety: SafetyConfig,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            waypoint_capacity: DEFAULT_ROUTE_CAPACITY,
            densify_segments: DEFAULT_DENSIFY_SEGMENTS,
            default_speed_kts: 12.0,
        }
    }
}

impl Default for SafetyConfig {
    fn default() -> Self {
        Self {
            min_fluid_gm_m: MIN_FLUID_GM_M,
            squat_elevated_m: SQUAT_ELEVATED_M,
            squat_critical_m: SQUAT_CRITICAL_M,
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid parameter {parameter} = {value}: {reason}")]
    InvalidParameter {
        parameter: String,
        value: String,
        reason: String,
    },

    #[error("configuration serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ConfigError {
    fn invalid(parameter: &str, value: impl ToString, reason: &str) -> Self {
        ConfigError::InvalidParameter {
            parameter: parameter.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Owns and validates the engine configuration
#[derive(Debug, Clone, Default)]
pub struct ConfigurationManager {
    config: EngineConfig,
    is_modified: bool,
}

impl ConfigurationManager {
    /// Create a configuration manager with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON configuration document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        Self::validate(&config)?;

        log::debug!("configuration loaded: {:?}", config);
        Ok(Self {
            config,
            is_modified: false,
        })
    }

    /// Serialize the current configuration and mark it saved
    pub fn to_json(&mut self) -> Result<String, ConfigError> {
        let json = serde_json::to_string_pretty(&self.config)?;
        self.is_modified = false;
        Ok(json)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Replace the whole configuration after validation
    pub fn update_config(&mut self, config: EngineConfig) -> Result<(), ConfigError> {
        Self::validate(&config)?;
        self.config = config;
        self.is_modified = true;
        Ok(())
    }

    /// Check if configuration has been modified since last save
    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    /// Update waypoint capacity; returns the previous value
    pub fn set_waypoint_capacity(&mut self, capacity: usize) -> Result<usize, ConfigError> {
        Self::validate_capacity(capacity)?;
        let old_value = std::mem::replace(&mut self.config.planner.waypoint_capacity, capacity);
        self.is_modified = true;
        Ok(old_value)
    }

    /// Update densify segment count; returns the previous value
    pub fn set_densify_segments(&mut self, segments: usize) -> Result<usize, ConfigError> {
        Self::validate_segments(segments)?;
        let old_value = std::mem::replace(&mut self.config.planner.densify_segments, segments);
        self.is_modified = true;
        Ok(old_value)
    }

    /// Update default passage speed; returns the previous value
    pub fn set_default_speed(&mut self, speed_kts: f64) -> Result<f64, ConfigError> {
        Self::validate_speed(speed_kts)?;
        let old_value = std::mem::replace(&mut self.config.planner.default_speed_kts, speed_kts);
        self.is_modified = true;
        Ok(old_value)
    }

    /// Update the minimum fluid GM; returns the previous value
    pub fn set_min_fluid_gm(&mut self, gm_m: f64) -> Result<f64, ConfigError> {
        Self::validate_gm(gm_m)?;
        let old_value = std::mem::replace(&mut self.config.safety.min_fluid_gm_m, gm_m);
        self.is_modified = true;
        Ok(old_value)
    }

    /// Empty route bounded by the configured capacity
    pub fn create_route(&self) -> Route {
        Route::with_capacity(self.config.planner.waypoint_capacity)
    }

    /// Drawing polyline for `route` at the configured segment count
    pub fn densified_path(&self, route: &Route) -> Vec<GeoPoint> {
        route.densified_path(self.config.planner.densify_segments)
    }

    /// Passage time for `route`, at the configured speed when none is given
    pub fn travel_time(&self, route: &Route, speed_kts: Option<f64>) -> TravelTime {
        route.travel_time(speed_kts.unwrap_or(self.config.planner.default_speed_kts))
    }

    /// Stability assessment against the configured GM floor
    pub fn assess_stability(&self, condition: &StabilityCondition) -> StabilityAssessment {
        condition.assess_with_minimum(self.config.safety.min_fluid_gm_m)
    }

    /// Squat estimate banded by the configured thresholds
    pub fn estimate_squat(&self, block_coefficient: f64, speed_kts: f64) -> SquatEstimate {
        SquatEstimate::with_thresholds(
            block_coefficient,
            speed_kts,
            self.config.safety.squat_elevated_m,
            self.config.safety.squat_critical_m,
        )
    }

    fn validate(config: &EngineConfig) -> Result<(), ConfigError> {
        Self::validate_capacity(config.planner.waypoint_capacity)?;
        Self::validate_segments(config.planner.densify_segments)?;
        Self::validate_speed(config.planner.default_speed_kts)?;
        Self::validate_gm(config.safety.min_fluid_gm_m)?;

        let safety = &config.safety;
        if !(safety.squat_elevated_m > 0.0) {
            return Err(ConfigError::invalid(
                "squat_elevated_m",
                safety.squat_elevated_m,
                "threshold must be positive",
            ));
        }
        if !(safety.squat_critical_m > safety.squat_elevated_m) {
            return Err(ConfigError::invalid(
                "squat_critical_m",
                safety.squat_critical_m,
                "critical threshold must exceed the elevated threshold",
            ));
        }

        Ok(())
    }

    fn validate_capacity(capacity: usize) -> Result<(), ConfigError> {
        if !(2..=1000).contains(&capacity) {
            return Err(ConfigError::invalid(
                "waypoint_capacity",
                capacity,
                "capacity must be between 2 and 1000 waypoints",
            ));
        }
        Ok(())
    }

    fn validate_segments(segments: usize) -> Result<(), ConfigError> {
        if !(1..=10000).contains(&segments) {
            return Err(ConfigError::invalid(
                "densify_segments",
                segments,
                "segments must be between 1 and 10000",
            ));
        }
        Ok(())
    }

    fn validate_speed(speed_kts: f64) -> Result<(), ConfigError> {
        if !(speed_kts > 0.0 && speed_kts <= 60.0) {
            return Err(ConfigError::invalid(
                "default_speed_kts",
                speed_kts,
                "speed must be above 0 and at most 60 knots",
            ));
        }
        Ok(())
    }

    fn validate_gm(gm_m: f64) -> Result<(), ConfigError> {
        if !(0.0..=5.0).contains(&gm_m) {
            return Err(ConfigError::invalid(
                "min_fluid_gm_m",
                gm_m,
                "GM floor must be between 0 and 5 meters",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configuration() {
        let manager = ConfigurationManager::new();
        let config = manager.config();

        assert_eq!(config.planner.waypoint_capacity, 20);
        assert_eq!(config.planner.densify_segments, 100);
        assert_eq!(config.safety.min_fluid_gm_m, 0.15);
        assert!(!manager.is_modified());
    }

    #[test]
    fn test_json_round_trip_preserves_changes() {
        let mut manager = ConfigurationManager::new();
        manager.set_waypoint_capacity(50).unwrap();
        assert!(manager.is_modified());

        let json = manager.to_json().unwrap();
        assert!(!manager.is_modified());

        let loaded = ConfigurationManager::from_json(&json).unwrap();
        assert_eq!(loaded.config().planner.waypoint_capacity, 50);
    }

    #[test]
    fn test_invalid_json_document() {
        let result = ConfigurationManager::from_json("{ not json");
        assert!(matches!(result, Err(ConfigError::Serialization(_))));
    }

    #[test]
    fn test_invalid_values_in_document() {
        let json = r#"{
            "planner": { "waypoint_capacity": 1, "densify_segments": 100, "default_speed_kts": 12.0 },
            "safety": { "min_fluid_gm_m": 0.15, "squat_elevated_m": 1.0, "squat_critical_m": 2.0 }
        }"#;

        let err = ConfigurationManager::from_json(json).unwrap_err();
        assert!(err.to_string().contains("waypoint_capacity"));
    }

    #[test]
    fn test_squat_thresholds_must_be_ordered() {
        let mut config = EngineConfig::default();
        config.safety.squat_critical_m = 0.5;

        let mut manager = ConfigurationManager::new();
        assert!(manager.update_config(config).is_err());
        assert_eq!(manager.config().safety.squat_critical_m, 2.0);
    }

    #[test]
    fn test_setters_return_old_value() {
        let mut manager = ConfigurationManager::new();

        assert_eq!(manager.set_densify_segments(50).unwrap(), 100);
        assert_eq!(manager.set_default_speed(14.5).unwrap(), 12.0);
        assert_eq!(manager.set_min_fluid_gm(0.3).unwrap(), 0.15);

        assert!(manager.set_densify_segments(0).is_err());
        assert!(manager.set_default_speed(0.0).is_err());
        assert!(manager.set_default_speed(f64::NAN).is_err());
        assert!(manager.set_min_fluid_gm(-0.1).is_err());
        assert_eq!(manager.config().planner.densify_segments, 50);
    }

    #[test]
    fn test_create_route_uses_capacity() {
        let mut manager = ConfigurationManager::new();
        manager.set_waypoint_capacity(2).unwrap();

        let mut route = manager.create_route();
        assert!(route.add_waypoint(GeoPoint::new(0.0, 0.0)));
        assert!(route.add_waypoint(GeoPoint::new(1.0, 1.0)));
        assert!(!route.add_waypoint(GeoPoint::new(2.0, 2.0)));
    }

    #[test]
    fn test_configured_densify_segments() {
        let mut manager = ConfigurationManager::new();
        let mut route = manager.create_route();
        route.add_waypoint(GeoPoint::new(40.7, -74.0));
        route.add_waypoint(GeoPoint::new(51.5, -0.1));

        assert_eq!(manager.densified_path(&route).len(), 101);

        manager.set_densify_segments(8).unwrap();
        let path = manager.densified_path(&route);
        assert_eq!(path.len(), 9);
        assert_eq!(path[8], GeoPoint::new(51.5, -0.1));
    }

    #[test]
    fn test_travel_time_falls_back_to_configured_speed() {
        let mut manager = ConfigurationManager::new();
        let mut route = manager.create_route();
        route.add_waypoint(GeoPoint::new(0.0, 0.0));
        route.add_waypoint(GeoPoint::new(0.0, 2.0));
        let distance = route.selected_total_distance();

        let eta = manager.travel_time(&route, None);
        assert!((eta.total_hours - distance / 12.0).abs() < 1e-9);

        manager.set_default_speed(20.0).unwrap();
        let eta = manager.travel_time(&route, None);
        assert!((eta.total_hours - distance / 20.0).abs() < 1e-9);

        let eta = manager.travel_time(&route, Some(10.0));
        assert!((eta.total_hours - distance / 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_configured_safety_thresholds() {
        let mut manager = ConfigurationManager::new();
        manager.set_min_fluid_gm(1.0).unwrap();

        let condition = StabilityCondition {
            solid_kg: 8.50,
            km: 9.45,
            displacement: 25000.0,
            total_free_surface_moment: 1500.0,
        };
        assert!(!manager.assess_stability(&condition).compliant);

        let estimate = manager.estimate_squat(0.80, 14.0);
        assert_eq!(estimate.confined_m, 2.0 * estimate.open_water_m);
    }
}
