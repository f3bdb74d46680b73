//! Environmental risk models

pub mod squat;
pub mod anchoring;

pub use squat::{
    squat_confined, squat_open_water, under_keel_clearance, SquatBand, SquatEstimate,
    UnderKeelClearance,
};
pub use anchoring::{
    anchor_plan, classify_risk, pull_angle, required_scope, scope_ratio, swinging_radius,
    AnchorPlan, AnchorRisk, AnchorScenario, AnchorType, BottomType, LineType, SmartAnchorPlan,
    SwingingCircle,
};
