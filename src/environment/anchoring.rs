//! Anchoring: scope, cable length, swinging circle and holding risk
//!
//! Two models live here. The quick one picks 3:1 or 5:1 scope on wind
//! alone and reports cable in shackles. The planner model also weighs
//! rode type for scope, estimates the pull angle at the anchor shank and
//! runs a fixed decision table over bottom, wind and anchor holding power.

use crate::core::{METERS_PER_NM, SHACKLE_LENGTH_M};
use serde::{Deserialize, Serialize};

/// Wind above which the quick model goes to 5:1
const QUICK_SCOPE_WIND_KTS: f64 = 15.0;

/// Wind at which a chain catenary is considered pulled straight
const CATENARY_STRAIGHT_WIND_KTS: f64 = 40.0;

/// Bottom risk at or above this is a caution on its own
const BOTTOM_CAUTION_LEVEL: u8 = 3;

/// Holding coefficient below this is weak holding
const WEAK_HOLDING_COEFFICIENT: f64 = 0.5;

/// Seabed in the anchorage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BottomType {
    Sand,
    Mud,
    Weed,
    Rock,
}

impl BottomType {
    pub const ALL: [BottomType; 4] = [BottomType::Sand, BottomType::Mud, BottomType::Weed, BottomType::Rock];

    /// 1 = good holding ground, 3 = poor
    pub fn risk_level(&self) -> u8 {
        match self {
            BottomType::Sand | BottomType::Mud => 1,
            BottomType::Weed => 2,
            BottomType::Rock => 3,
        }
    }
}

/// Anchor rode construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineType {
    Chain,
    /// Chain leader on a rope rode
    Mixed,
    Rope,
}

impl LineType {
    pub const ALL: [LineType; 3] = [LineType::Chain, LineType::Mixed, LineType::Rope];
}

/// Anchor pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnchorType {
    /// Roll-bar new-generation anchors
    NewGeneration,
    Delta,
    Danforth,
    Plough,
    Bruce,
    Grapnel,
    Mushroom,
}

impl AnchorType {
    pub const ALL: [AnchorType; 7] = [
        AnchorType::NewGeneration,
        AnchorType::Delta,
        AnchorType::Danforth,
        AnchorType::Plough,
        AnchorType::Bruce,
        AnchorType::Grapnel,
        AnchorType::Mushroom,
    ];

    /// Relative holding power, 1.0 for the best patterns
    pub fn holding_coefficient(&self) -> f64 {
        match self {
            AnchorType::NewGeneration => 1.0,
            AnchorType::Delta => 0.85,
            AnchorType::Danforth => 0.8,
            AnchorType::Plough => 0.7,
            AnchorType::Bruce => 0.6,
            AnchorType::Grapnel => 0.4,
            AnchorType::Mushroom => 0.3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AnchorRisk {
    Safe,
    Caution,
    Danger,
}

/// Quick scope calculation result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorPlan {
    pub scope_ratio: f64,
    pub chain_length_m: f64,
    pub shackles: f64,
}

/// Swinging circle around the anchor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwingingCircle {
    pub radius_m: f64,
    pub radius_nm: f64,
}

/// Inputs for the planner model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorScenario {
    pub water_depth_m: f64,
    pub wind_kts: f64,
    pub bottom_type: BottomType,
    pub line_type: LineType,
    pub anchor_type: AnchorType,
}

/// Planner model result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmartAnchorPlan {
    pub required_scope: f64,
    pub rode_length_m: f64,
    pub shackles: f64,
    /// Angle between rode and seabed at the anchor (degrees)
    pub pull_angle_deg: f64,
    pub risk: AnchorRisk,
}

/// 5:1 above 15 kt, 3:1 otherwise
pub fn scope_ratio(wind_kts: f64) -> f64 {
    if wind_kts > QUICK_SCOPE_WIND_KTS {
        5.0
    } else {
        3.0
    }
}

pub fn anchor_plan(depth_m: f64, wind_kts: f64) -> AnchorPlan {
    let scope_ratio = scope_ratio(wind_kts);
    let chain_length_m = depth_m * scope_ratio;

    AnchorPlan {
        scope_ratio,
        chain_length_m,
        shackles: chain_length_m / SHACKLE_LENGTH_M,
    }
}

/// Radius swept by the bow: cable out plus length overall
pub fn swinging_radius(shackles: f64, loa_m: f64) -> SwingingCircle {
    let radius_m = shackles * SHACKLE_LENGTH_M + loa_m;
    SwingingCircle {
        radius_m,
        radius_nm: radius_m / METERS_PER_NM,
    }
}

impl AnchorPlan {
    pub fn swinging_circle(&self, loa_m: f64) -> SwingingCircle {
        swinging_radius(self.shackles, loa_m)
    }
}

/// Scope for the planner model
///
/// Chain: 3, 5 above 20 kt, 7 above 40 kt. Rope and mixed: 5, 7 above 15 kt.
pub fn required_scope(line_type: LineType, wind_kts: f64) -> f64 {
    match line_type {
        LineType::Chain => {
            if wind_kts > 40.0 {
                7.0
            } else if wind_kts > 20.0 {
                5.0
            } else {
                3.0
            }
        }
        LineType::Rope | LineType::Mixed => {
            if wind_kts > 15.0 {
                7.0
            } else {
                5.0
            }
        }
    }
}

/// Pull angle at the anchor in degrees
///
/// A straight rode meets the bottom at `asin(1 / scope)`. Chain hangs in a
/// catenary that lies along the bottom in light airs, so its angle is
/// scaled by `min(1, wind / 40)`.
pub fn pull_angle(line_type: LineType, scope: f64, wind_kts: f64) -> f64 {
    let straight = if scope > 1.0 {
        (1.0 / scope).asin().to_degrees()
    } else {
        90.0
    };

    match line_type {
        LineType::Chain => {
            let wind_factor = (wind_kts.max(0.0) / CATENARY_STRAIGHT_WIND_KTS).min(1.0);
            straight * wind_factor
        }
        LineType::Rope | LineType::Mixed => straight,
    }
}

/// Holding risk decision table
///
/// Danger: rock above 15 kt, anything above 50 kt, or weak holding
/// (coefficient under 0.5) above 15 kt. Caution: poor bottom (rock) or
/// wind above 30 kt. Otherwise safe.
pub fn classify_risk(bottom_type: BottomType, wind_kts: f64, holding_coefficient: f64) -> AnchorRisk {
    let rocky = bottom_type == BottomType::Rock;
    let weak_holding = holding_coefficient < WEAK_HOLDING_COEFFICIENT;

    if (rocky && wind_kts > 15.0) || wind_kts > 50.0 || (weak_holding && wind_kts > 15.0) {
        AnchorRisk::Danger
    } else if bottom_type.risk_level() >= BOTTOM_CAUTION_LEVEL || wind_kts > 30.0 {
        AnchorRisk::Caution
    } else {
        AnchorRisk::Safe
    }
}

impl AnchorScenario {
    pub fn plan(&self) -> SmartAnchorPlan {
        let required_scope = required_scope(self.line_type, self.wind_kts);
        let rode_length_m = self.water_depth_m * required_scope;
        let risk = classify_risk(
            self.bottom_type,
            self.wind_kts,
            self.anchor_type.holding_coefficient(),
        );

        if risk == AnchorRisk::Danger {
            log::debug!(
                "anchoring classified as danger: {:?} bottom, {} kt, {:?}",
                self.bottom_type,
                self.wind_kts,
                self.anchor_type
            );
        }

        SmartAnchorPlan {
            required_scope,
            rode_length_m,
            shackles: rode_length_m / SHACKLE_LENGTH_M,
            pull_angle_deg: pull_angle(self.line_type, required_scope, self.wind_kts),
            risk,
        }
    }
}

impl SmartAnchorPlan {
    pub fn swinging_circle(&self, loa_m: f64) -> SwingingCircle {
        swinging_radius(self.shackles, loa_m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIND_BANDS: [f64; 14] = [
        0.0, 10.0, 15.0, 15.1, 20.0, 20.1, 25.0, 30.0, 30.1, 40.0, 45.0, 50.0, 50.1, 65.0,
    ];

    fn scenario(bottom_type: BottomType, line_type: LineType, wind_kts: f64) -> AnchorScenario {
        AnchorScenario {
            water_depth_m: 10.0,
            wind_kts,
            bottom_type,
            line_type,
            anchor_type: AnchorType::Delta,
        }
    }

    #[test]
    fn test_light_wind_quick_plan() {
        let plan = anchor_plan(10.0, 10.0);

        assert_eq!(plan.scope_ratio, 3.0);
        assert_eq!(plan.chain_length_m, 30.0);
        assert!((plan.shackles - 1.09).abs() < 0.005);
    }

    #[test]
    fn test_strong_wind_quick_plan() {
        let plan = anchor_plan(10.0, 20.0);

        assert_eq!(plan.scope_ratio, 5.0);
        assert_eq!(plan.chain_length_m, 50.0);
        assert_eq!(scope_ratio(15.0), 3.0);
    }

    #[test]
    fn test_swinging_circle() {
        let plan = anchor_plan(10.0, 10.0);
        let circle = plan.swinging_circle(50.0);

        assert!((circle.radius_m - 80.0).abs() < 1e-9);
        assert!((circle.radius_nm - 80.0 / 1852.0).abs() < 1e-12);
    }

    #[test]
    fn test_required_scope_chain() {
        assert_eq!(required_scope(LineType::Chain, 10.0), 3.0);
        assert_eq!(required_scope(LineType::Chain, 20.0), 3.0);
        assert_eq!(required_scope(LineType::Chain, 20.1), 5.0);
        assert_eq!(required_scope(LineType::Chain, 40.0), 5.0);
        assert_eq!(required_scope(LineType::Chain, 41.0), 7.0);
    }

    #[test]
    fn test_required_scope_rope_and_mixed() {
        for line in [LineType::Rope, LineType::Mixed] {
            assert_eq!(required_scope(line, 0.0), 5.0);
            assert_eq!(required_scope(line, 15.0), 5.0);
            assert_eq!(required_scope(line, 16.0), 7.0);
        }
    }

    #[test]
    fn test_pull_angle_rope() {
        let angle = pull_angle(LineType::Rope, 5.0, 10.0);
        assert!((angle - 11.537).abs() < 1e-3);
        // Rope angle does not depend on wind
        assert_eq!(angle, pull_angle(LineType::Rope, 5.0, 45.0));
        assert_eq!(angle, pull_angle(LineType::Mixed, 5.0, 10.0));
    }

    #[test]
    fn test_pull_angle_chain_catenary() {
        let straight = pull_angle(LineType::Rope, 3.0, 0.0);

        assert_eq!(pull_angle(LineType::Chain, 3.0, 0.0), 0.0);
        assert!((pull_angle(LineType::Chain, 3.0, 20.0) - straight / 2.0).abs() < 1e-12);
        assert_eq!(pull_angle(LineType::Chain, 3.0, 40.0), straight);
        assert_eq!(pull_angle(LineType::Chain, 3.0, 60.0), straight);
        assert!(pull_angle(LineType::Chain, 3.0, 10.0) < pull_angle(LineType::Chain, 3.0, 30.0));
    }

    #[test]
    fn test_pull_angle_without_scope() {
        assert_eq!(pull_angle(LineType::Rope, 1.0, 10.0), 90.0);
    }

    #[test]
    fn test_smart_plan() {
        let plan = scenario(BottomType::Sand, LineType::Chain, 25.0).plan();

        assert_eq!(plan.required_scope, 5.0);
        assert_eq!(plan.rode_length_m, 50.0);
        assert!((plan.shackles - 50.0 / 27.5).abs() < 1e-12);
        assert!(plan.pull_angle_deg > 0.0 && plan.pull_angle_deg < 11.6);
        assert_eq!(plan.risk, AnchorRisk::Safe);

        let circle = plan.swinging_circle(30.0);
        assert!((circle.radius_m - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_bottom_risk_levels() {
        assert_eq!(BottomType::Sand.risk_level(), 1);
        assert_eq!(BottomType::Mud.risk_level(), 1);
        assert_eq!(BottomType::Weed.risk_level(), 2);
        assert_eq!(BottomType::Rock.risk_level(), 3);
    }

    /// Hand-written reading of the decision table, organised by bottom first
    fn expected_risk(bottom: BottomType, wind: f64, anchor: AnchorType) -> AnchorRisk {
        let weak = matches!(anchor, AnchorType::Grapnel | AnchorType::Mushroom);
        match bottom {
            BottomType::Rock => {
                if wind > 15.0 {
                    AnchorRisk::Danger
                } else {
                    AnchorRisk::Caution
                }
            }
            BottomType::Sand | BottomType::Mud | BottomType::Weed => {
                if wind > 50.0 {
                    AnchorRisk::Danger
                } else if weak && wind > 15.0 {
                    AnchorRisk::Danger
                } else if wind > 30.0 {
                    AnchorRisk::Caution
                } else {
                    AnchorRisk::Safe
                }
            }
        }
    }

    #[test]
    fn test_risk_table_exhaustive() {
        let mut checked = 0;
        for bottom in BottomType::ALL {
            for line in LineType::ALL {
                for anchor in AnchorType::ALL {
                    for wind in WIND_BANDS {
                        let plan = AnchorScenario {
                            water_depth_m: 12.0,
                            wind_kts: wind,
                            bottom_type: bottom,
                            line_type: line,
                            anchor_type: anchor,
                        }
                        .plan();

                        assert_eq!(
                            plan.risk,
                            expected_risk(bottom, wind, anchor),
                            "{:?} {:?} {:?} {} kt",
                            bottom,
                            line,
                            anchor,
                            wind
                        );
                        checked += 1;
                    }
                }
            }
        }
        assert_eq!(checked, 4 * 3 * 7 * WIND_BANDS.len());
    }

    #[test]
    fn test_risk_spot_checks() {
        assert_eq!(classify_risk(BottomType::Rock, 10.0, 1.0), AnchorRisk::Caution);
        assert_eq!(classify_risk(BottomType::Rock, 16.0, 1.0), AnchorRisk::Danger);
        assert_eq!(classify_risk(BottomType::Sand, 51.0, 1.0), AnchorRisk::Danger);
        assert_eq!(classify_risk(BottomType::Mud, 16.0, 0.4), AnchorRisk::Danger);
        assert_eq!(classify_risk(BottomType::Mud, 15.0, 0.4), AnchorRisk::Safe);
        assert_eq!(classify_risk(BottomType::Weed, 31.0, 0.8), AnchorRisk::Caution);
        assert_eq!(classify_risk(BottomType::Weed, 30.0, 0.8), AnchorRisk::Safe);
    }
}
