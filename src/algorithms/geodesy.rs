//! Spherical-Earth sailing calculations
//!
//! Position, course and distance primitives used by the route planner:
//! - Great-circle (orthodromic) distance and initial course
//! - Rhumb-line (loxodromic) course and distance via meridional parts
//! - Mercator sailing with explicit quadrant resolution
//! - Mercator dead reckoning (arrival position)
//! - Plane sailing for short runs
//! - Arc to time conversion
//!
//! All angles are in degrees and all distances in nautical miles. Inputs
//! are assumed to be within range; nothing here validates coordinates.

use crate::core::{
    normalize_bearing, wrap_longitude, GeoPoint, DEGREES_PER_HOUR, EARTH_RADIUS_NM, FLOAT_EPSILON,
    MERIDIONAL_PARTS_FACTOR, MINUTES_PER_HALF_CIRCLE, NM_PER_DEGREE,
};
use serde::{Deserialize, Serialize};

/// Result of a Mercator sailing between two fixed points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MercatorSailing {
    /// True course (degrees, [0, 360))
    pub course_deg: f64,
    /// Rhumb-line distance (nautical miles)
    pub distance_nm: f64,
    /// Difference of latitude (minutes, positive north)
    pub d_lat_min: f64,
    /// Difference of longitude (minutes, positive east, within ±10800)
    pub d_lon_min: f64,
    /// Difference of meridional parts
    pub d_mp: f64,
}

/// Result of a plane sailing between two points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneSailing {
    /// Mean of the two latitudes (degrees)
    pub middle_latitude: f64,
    /// Difference of latitude (minutes)
    pub d_lat_min: f64,
    /// Difference of longitude (minutes)
    pub d_lon_min: f64,
    /// East-west distance made good (nautical miles, positive east)
    pub departure_nm: f64,
    pub distance_nm: f64,
    pub course_deg: f64,
}

/// Great-circle distance using the spherical law of cosines
///
/// The acos argument is clamped to [-1, 1], so identical and antipodal
/// points yield 0 and π·R instead of NaN.
pub fn great_circle_distance(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let cos_angle = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * d_lon.cos();
    if !(-1.0..=1.0).contains(&cos_angle) {
        log::trace!("clamping acos argument {} for great-circle distance", cos_angle);
    }

    cos_angle.clamp(-1.0, 1.0).acos() * EARTH_RADIUS_NM
}

/// Initial great-circle course from `a` towards `b`
pub fn initial_bearing(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

    normalize_bearing(y.atan2(x).to_degrees())
}

/// Meridional parts for a latitude, signed by hemisphere
///
/// Exactly zero on the equator.
pub fn meridional_parts(latitude: f64) -> f64 {
    if latitude == 0.0 {
        return 0.0;
    }

    let magnitude = MERIDIONAL_PARTS_FACTOR
        * (45.0 + latitude.abs() / 2.0).to_radians().tan().log10();

    magnitude.copysign(latitude)
}

/// Difference of longitude in minutes, taking the short way round
fn d_lon_minutes(from: f64, to: f64) -> f64 {
    let mut d_lon = (to - from) * NM_PER_DEGREE;
    if d_lon > MINUTES_PER_HALF_CIRCLE {
        d_lon -= 2.0 * MINUTES_PER_HALF_CIRCLE;
    } else if d_lon < -MINUTES_PER_HALF_CIRCLE {
        d_lon += 2.0 * MINUTES_PER_HALF_CIRCLE;
    }
    d_lon
}

/// d.lat (minutes), d.long (minutes) and DMP between two points
fn rhumb_components(a: &GeoPoint, b: &GeoPoint) -> (f64, f64, f64) {
    let d_lat = (b.latitude - a.latitude) * NM_PER_DEGREE;
    let d_lon = d_lon_minutes(a.longitude, b.longitude);
    let d_mp = meridional_parts(b.latitude) - meridional_parts(a.latitude);
    (d_lat, d_lon, d_mp)
}

/// Rhumb distance once the course is known; switches to parallel sailing when d.lat vanishes
fn rhumb_distance_for(d_lat: f64, d_lon: f64, course_deg: f64, start_latitude: f64) -> f64 {
    if d_lat.abs() < FLOAT_EPSILON {
        (d_lon * start_latitude.to_radians().cos()).abs()
    } else {
        (d_lat / course_deg.to_radians().cos()).abs()
    }
}

/// Constant true course from `a` to `b`
pub fn rhumb_line_course(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let (_, d_lon, d_mp) = rhumb_components(a, b);
    normalize_bearing(d_lon.atan2(d_mp).to_degrees())
}

/// Distance along the rhumb line from `a` to `b`
pub fn rhumb_line_distance(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let (d_lat, d_lon, d_mp) = rhumb_components(a, b);
    let course = d_lon.atan2(d_mp).to_degrees();
    rhumb_distance_for(d_lat, d_lon, course, a.latitude)
}

/// Mercator sailing course and distance between two fixed points
///
/// The course angle is worked from absolute values and placed in its
/// quadrant from the signs of d.lat and d.long:
/// NE as computed, SE `180 - c`, SW `180 + c`, NW `360 - c`.
pub fn mercator_sailing(a: &GeoPoint, b: &GeoPoint) -> MercatorSailing {
    let (d_lat, d_lon, d_mp) = rhumb_components(a, b);

    let angle = d_lon.abs().atan2(d_mp.abs()).to_degrees();
    let northerly = d_lat >= 0.0;
    let easterly = d_lon >= 0.0;

    let course = match (northerly, easterly) {
        (true, true) => angle,
        (false, true) => 180.0 - angle,
        (false, false) => 180.0 + angle,
        (true, false) => 360.0 - angle,
    };

    MercatorSailing {
        course_deg: normalize_bearing(course),
        distance_nm: rhumb_distance_for(d_lat, d_lon, angle, a.latitude),
        d_lat_min: d_lat,
        d_lon_min: d_lon,
        d_mp,
    }
}

/// Dead-reckoning arrival position after sailing `distance_nm` on `course_deg`
///
/// For courses within tolerance of due east or west the longitude change
/// comes from parallel sailing, since DMP·tan(course) degenerates to 0·∞.
pub fn mercator_arrival_position(start: &GeoPoint, distance_nm: f64, course_deg: f64) -> GeoPoint {
    let course = course_deg.to_radians();
    let d_lat_min = distance_nm * course.cos();
    let latitude = start.latitude + d_lat_min / NM_PER_DEGREE;

    let d_lon_min = if d_lat_min.abs() < FLOAT_EPSILON {
        distance_nm * course.sin() / start.latitude.to_radians().cos()
    } else {
        let d_mp = meridional_parts(latitude) - meridional_parts(start.latitude);
        d_mp * course.tan()
    };

    GeoPoint {
        latitude,
        longitude: wrap_longitude(start.longitude + d_lon_min / NM_PER_DEGREE),
    }
}

/// Plane sailing for short runs (under about 250 nm)
pub fn plane_sailing(a: &GeoPoint, b: &GeoPoint) -> PlaneSailing {
    let middle_latitude = (a.latitude + b.latitude) / 2.0;
    let d_lat = (b.latitude - a.latitude) * NM_PER_DEGREE;
    let d_lon = d_lon_minutes(a.longitude, b.longitude);
    let departure = d_lon * middle_latitude.to_radians().cos();

    PlaneSailing {
        middle_latitude,
        d_lat_min: d_lat,
        d_lon_min: d_lon,
        departure_nm: departure,
        distance_nm: (d_lat * d_lat + departure * departure).sqrt(),
        course_deg: normalize_bearing(departure.atan2(d_lat).to_degrees()),
    }
}

/// Convert arc (degrees of longitude) to time (hours)
pub fn arc_to_time(degrees: f64) -> f64 {
    degrees / DEGREES_PER_HOUR
}

/// Convert time (hours) to arc (degrees of longitude)
pub fn time_to_arc(hours: f64) -> f64 {
    hours * DEGREES_PER_HOUR
}
