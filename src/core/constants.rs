//! Physical constants and planning defaults

/// Mean Earth radius used for great-circle sailing (nautical miles)
pub const EARTH_RADIUS_NM: f64 = 3440.065;

/// Nautical miles per degree of latitude (one minute of arc = 1 nm)
pub const NM_PER_DEGREE: f64 = 60.0;

/// Minutes of arc in 180 degrees, the limit for d.long
pub const MINUTES_PER_HALF_CIRCLE: f64 = 10800.0;

/// Meridional parts scale factor (minutes of arc per log10 unit)
pub const MERIDIONAL_PARTS_FACTOR: f64 = 7915.7;

/// Degrees of arc the Earth turns per hour
pub const DEGREES_PER_HOUR: f64 = 15.0;

/// Metres per nautical mile
pub const METERS_PER_NM: f64 = 1852.0;

/// Length of one shackle of anchor cable (meters)
pub const SHACKLE_LENGTH_M: f64 = 27.5;

/// IMO minimum fluid GM for intact stability (meters)
pub const MIN_FLUID_GM_M: f64 = 0.15;

/// Reference salt-water density used by hydrostatic tables (t/m³)
pub const REFERENCE_DENSITY: f64 = 1.025;

/// Default upper bound on waypoints in a route
pub const DEFAULT_ROUTE_CAPACITY: usize = 20;

/// Default number of segments when densifying a great-circle leg
pub const DEFAULT_DENSIFY_SEGMENTS: usize = 100;

/// Heel angle step for the GZ curve (degrees)
pub const GZ_STEP_DEG: u32 = 2;

/// Largest heel angle sampled on the GZ curve (degrees)
pub const GZ_MAX_HEEL_DEG: u32 = 60;

/// Squat above this is the elevated band (meters)
pub const SQUAT_ELEVATED_M: f64 = 1.0;

/// Squat above this is the critical band (meters)
pub const SQUAT_CRITICAL_M: f64 = 2.0;

/// Differences smaller than this are treated as zero in sailing formulas
pub const FLOAT_EPSILON: f64 = 1e-9;
