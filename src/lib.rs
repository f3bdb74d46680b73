//! Maritime Navigation Engine
//!
//! Pure computation library for passage planning and ship safety checks:
//! great-circle, rhumb-line and plane sailings, waypoint routes, draft
//! surveys, intact stability, squat and anchoring risk.

pub mod core;
pub mod algorithms;
pub mod hull;
pub mod environment;
pub mod validation;
pub mod utils;
pub mod api;

// Re-export commonly used types
pub use crate::core::{GeoPoint, PathMode, EARTH_RADIUS_NM, MIN_FLUID_GM_M, SHACKLE_LENGTH_M};
pub use algorithms::{
    arc_to_time, densify_great_circle, estimated_travel_time, great_circle_distance,
    initial_bearing, mercator_arrival_position, mercator_sailing, meridional_parts, plane_sailing,
    rhumb_line_course, rhumb_line_distance, CompassReadings, Leg, Route, RouteSummary, TravelTime,
};
pub use hull::{DraftReadings, DraftSurvey, HullDeflection, StabilityAssessment, StabilityCondition};
pub use environment::{AnchorRisk, AnchorScenario, SquatBand, SquatEstimate};
pub use validation::{CoordinateValidator, NavigationError};
pub use utils::{ConfigError, ConfigurationManager, EngineConfig};
pub use api::{CoordinateFormat, JsonFormatter, PositionFormatter};
