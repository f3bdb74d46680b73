//! Route and waypoint planning
//!
//! A [`Route`] holds an ordered, bounded list of waypoints and keeps the
//! derived legs in step with it. Legs are recomputed eagerly after every
//! mutation, so `legs.len() == max(0, waypoints.len() - 1)` always holds.
//! Both great-circle and rhumb-line figures are stored for every leg; the
//! [`PathMode`] only selects which one is aggregated and drawn.

use crate::algorithms::geodesy::{
    great_circle_distance, initial_bearing, rhumb_line_course, rhumb_line_distance,
};
use crate::core::{GeoPoint, PathMode, DEFAULT_DENSIFY_SEGMENTS, DEFAULT_ROUTE_CAPACITY, FLOAT_EPSILON};
use crate::validation::NavigationError;
use serde::{Deserialize, Serialize};

/// Single passage between two consecutive waypoints
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    pub from: GeoPoint,
    pub to: GeoPoint,
    /// Great-circle distance (nautical miles)
    pub great_circle_distance_nm: f64,
    /// Rhumb-line distance (nautical miles)
    pub rhumb_distance_nm: f64,
    /// Initial great-circle course (degrees true)
    pub initial_bearing_deg: f64,
    /// Constant rhumb-line course (degrees true)
    pub rhumb_course_deg: f64,
}

impl Leg {
    /// Compute both sailings between two points
    pub fn between(from: GeoPoint, to: GeoPoint) -> Self {
        Self {
            from,
            to,
            great_circle_distance_nm: great_circle_distance(&from, &to),
            rhumb_distance_nm: rhumb_line_distance(&from, &to),
            initial_bearing_deg: initial_bearing(&from, &to),
            rhumb_course_deg: rhumb_line_course(&from, &to),
        }
    }

    /// Distance for the given path mode
    pub fn distance(&self, mode: PathMode) -> f64 {
        match mode {
            PathMode::GreatCircle => self.great_circle_distance_nm,
            PathMode::Rhumb => self.rhumb_distance_nm,
        }
    }

    /// Departure course for the given path mode
    pub fn bearing(&self, mode: PathMode) -> f64 {
        match mode {
            PathMode::GreatCircle => self.initial_bearing_deg,
            PathMode::Rhumb => self.rhumb_course_deg,
        }
    }

    /// Time on this leg at `speed_kts`
    pub fn travel_time(&self, mode: PathMode, speed_kts: f64) -> TravelTime {
        estimated_travel_time(self.distance(mode), speed_kts)
    }
}

/// Passage time split into whole days and hours
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TravelTime {
    pub days: u64,
    /// Whole hours remaining after the days (0..24)
    pub hours: u64,
    /// Unrounded passage time in hours
    pub total_hours: f64,
}

/// Aggregate figures for a route
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub waypoint_count: usize,
    pub leg_count: usize,
    pub path_mode: PathMode,
    pub total_great_circle_nm: f64,
    pub total_rhumb_nm: f64,
    /// Total for the selected path mode
    pub total_distance_nm: f64,
    /// Distance saved by sailing great circles instead of rhumb lines
    pub great_circle_savings_nm: f64,
}

/// Ordered, capacity-bounded waypoint list with derived legs
///
/// Serialized legs are ignored on load and rebuilt from the waypoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RouteState")]
pub struct Route {
    waypoints: Vec<GeoPoint>,
    legs: Vec<Leg>,
    capacity: usize,
    path_mode: PathMode,
}

/// Stored form of a route, without the derived legs
#[derive(Debug, Clone, Deserialize)]
struct RouteState {
    waypoints: Vec<GeoPoint>,
    capacity: usize,
    #[serde(default)]
    path_mode: PathMode,
}

impl TryFrom<RouteState> for Route {
    type Error = NavigationError;

    fn try_from(state: RouteState) -> Result<Self, Self::Error> {
        if state.waypoints.len() > state.capacity {
            return Err(NavigationError::invalid_parameter(
                "waypoints",
                state.waypoints.len(),
                &format!("route holds at most {} waypoints", state.capacity),
            ));
        }

        let mut route = Route {
            waypoints: state.waypoints,
            legs: Vec::new(),
            capacity: state.capacity,
            path_mode: state.path_mode,
        };
        route.recompute();
        Ok(route)
    }
}

impl Default for Route {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_ROUTE_CAPACITY)
    }
}

impl Route {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty route holding at most `capacity` waypoints
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            waypoints: Vec::with_capacity(capacity),
            legs: Vec::new(),
            capacity,
            path_mode: PathMode::default(),
        }
    }

    /// Append a waypoint; returns false (and changes nothing) when the route is full
    pub fn add_waypoint(&mut self, point: GeoPoint) -> bool {
        if self.is_full() {
            log::debug!("waypoint rejected, route at capacity {}", self.capacity);
            return false;
        }

        self.waypoints.push(point);
        self.recompute();
        true
    }

    /// Insert a waypoint before `index`; an index past the end appends
    pub fn insert_waypoint(&mut self, index: usize, point: GeoPoint) -> bool {
        if self.is_full() {
            log::debug!("waypoint rejected, route at capacity {}", self.capacity);
            return false;
        }

        let index = index.min(self.waypoints.len());
        self.waypoints.insert(index, point);
        self.recompute();
        true
    }

    /// Remove the waypoint at `index`, if any
    pub fn remove_waypoint(&mut self, index: usize) -> Option<GeoPoint> {
        if index >= self.waypoints.len() {
            return None;
        }

        let removed = self.waypoints.remove(index);
        self.recompute();
        Some(removed)
    }

    pub fn clear(&mut self) {
        self.waypoints.clear();
        self.legs.clear();
    }

    /// Change the displayed path type; the route is recomputed in full
    pub fn set_path_mode(&mut self, mode: PathMode) {
        self.path_mode = mode;
        self.recompute();
    }

    pub fn path_mode(&self) -> PathMode {
        self.path_mode
    }

    pub fn waypoints(&self) -> &[GeoPoint] {
        &self.waypoints
    }

    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.waypoints.len() >= self.capacity
    }

    /// Sum of leg distances for `mode`
    pub fn total_distance(&self, mode: PathMode) -> f64 {
        self.legs.iter().fold(0.0, |total, leg| total + leg.distance(mode))
    }

    /// Total for the currently selected path mode
    pub fn selected_total_distance(&self) -> f64 {
        self.total_distance(self.path_mode)
    }

    /// Rhumb total minus great-circle total, never negative
    pub fn great_circle_savings(&self) -> f64 {
        let savings = self.total_distance(PathMode::Rhumb) - self.total_distance(PathMode::GreatCircle);
        savings.max(0.0)
    }

    /// Passage time over the selected total at `speed_kts`
    pub fn travel_time(&self, speed_kts: f64) -> TravelTime {
        estimated_travel_time(self.selected_total_distance(), speed_kts)
    }

    pub fn summary(&self) -> RouteSummary {
        RouteSummary {
            waypoint_count: self.waypoints.len(),
            leg_count: self.legs.len(),
            path_mode: self.path_mode,
            total_great_circle_nm: self.total_distance(PathMode::GreatCircle),
            total_rhumb_nm: self.total_distance(PathMode::Rhumb),
            total_distance_nm: self.selected_total_distance(),
            great_circle_savings_nm: self.great_circle_savings(),
        }
    }

    /// Polyline for drawing the route in the selected mode
    ///
    /// Great-circle legs are densified with `segments` steps each and the
    /// shared endpoints between legs appear once. Rhumb lines are straight
    /// on a Mercator chart, so the waypoints themselves are returned.
    pub fn densified_path(&self, segments: usize) -> Vec<GeoPoint> {
        if self.path_mode == PathMode::Rhumb || self.legs.is_empty() {
            return self.waypoints.clone();
        }

        let mut path = Vec::with_capacity(self.legs.len() * segments + 1);
        for (i, leg) in self.legs.iter().enumerate() {
            let points = densify_great_circle(&leg.from, &leg.to, segments);
            let skip = if i == 0 { 0 } else { 1 };
            path.extend(points.into_iter().skip(skip));
        }
        path
    }

    fn recompute(&mut self) {
        self.legs = legs_for(&self.waypoints);
        log::trace!(
            "route recomputed: {} waypoints, {} legs, {:?}",
            self.waypoints.len(),
            self.legs.len(),
            self.path_mode
        );
    }
}

/// Legs for each adjacent pair of waypoints
pub fn legs_for(waypoints: &[GeoPoint]) -> Vec<Leg> {
    waypoints
        .windows(2)
        .map(|pair| Leg::between(pair[0], pair[1]))
        .collect()
}

/// Passage time for `total_distance_nm` at `speed_kts`
///
/// Speeds at or below zero are floored to 1 kt.
pub fn estimated_travel_time(total_distance_nm: f64, speed_kts: f64) -> TravelTime {
    let speed = if speed_kts > 0.0 {
        speed_kts
    } else {
        log::debug!("speed {} kt floored to 1 kt for travel time", speed_kts);
        1.0
    };

    // A -0.0 distance (e.g. an empty float sum) reports as zero
    let total_hours = (total_distance_nm / speed) + 0.0;
    let whole_hours = total_hours.max(0.0).floor() as u64;

    TravelTime {
        days: whole_hours / 24,
        hours: whole_hours % 24,
        total_hours,
    }
}

/// Points along the great circle from `a` to `b` by spherical linear interpolation
///
/// Returns `segments + 1` points with the exact endpoints at either end.
/// Coincident (and antipodal, where the great circle is undefined)
/// endpoints return `[a, b]`.
pub fn densify_great_circle(a: &GeoPoint, b: &GeoPoint, segments: usize) -> Vec<GeoPoint> {
    let va = a.to_unit_vector();
    let vb = b.to_unit_vector();
    let angular_distance = va.cross(&vb).norm().atan2(va.dot(&vb));
    let sin_distance = angular_distance.sin();

    if angular_distance.abs() < FLOAT_EPSILON || sin_distance.abs() < FLOAT_EPSILON {
        log::trace!("densify skipped for degenerate endpoints {:?} {:?}", a, b);
        return vec![*a, *b];
    }

    let segments = segments.max(1);
    let mut points = Vec::with_capacity(segments + 1);
    points.push(*a);

    for i in 1..segments {
        let fraction = i as f64 / segments as f64;
        let weight_a = ((1.0 - fraction) * angular_distance).sin() / sin_distance;
        let weight_b = (fraction * angular_distance).sin() / sin_distance;
        let v = va * weight_a + vb * weight_b;
        points.push(GeoPoint::from_unit_vector(&v));
    }

    points.push(*b);
    points
}

/// [`densify_great_circle`] with the default segment count
pub fn densify_great_circle_default(a: &GeoPoint, b: &GeoPoint) -> Vec<GeoPoint> {
    densify_great_circle(a, b, DEFAULT_DENSIFY_SEGMENTS)
}
