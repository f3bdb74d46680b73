//! Navigation algorithms

pub mod geodesy;
pub mod route;
pub mod compass;

pub use geodesy::{
    arc_to_time, great_circle_distance, initial_bearing, mercator_arrival_position,
    mercator_sailing, meridional_parts, plane_sailing, rhumb_line_course, rhumb_line_distance,
    time_to_arc, MercatorSailing, PlaneSailing,
};
pub use route::{
    densify_great_circle, densify_great_circle_default, estimated_travel_time, legs_for, Leg,
    Route, RouteSummary, TravelTime,
};
pub use compass::{CompassError, CompassReadings, GyroErrorSense};
