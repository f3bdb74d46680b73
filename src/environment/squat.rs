//! Squat estimation (Barrass)
//!
//! Open-water squat is `Cb · V² / 100` meters with V in knots; in a
//! confined channel it doubles.

use crate::core::{SQUAT_CRITICAL_M, SQUAT_ELEVATED_M};
use serde::{Deserialize, Serialize};

/// Risk band for a squat figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SquatBand {
    Nominal,
    Elevated,
    Critical,
}

impl SquatBand {
    /// Band using the default 1.0 m / 2.0 m limits
    pub fn classify(squat_m: f64) -> Self {
        Self::classify_with(squat_m, SQUAT_ELEVATED_M, SQUAT_CRITICAL_M)
    }

    pub fn classify_with(squat_m: f64, elevated_m: f64, critical_m: f64) -> Self {
        if squat_m > critical_m {
            SquatBand::Critical
        } else if squat_m > elevated_m {
            SquatBand::Elevated
        } else {
            SquatBand::Nominal
        }
    }
}

/// Squat in open and confined water for one speed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SquatEstimate {
    pub block_coefficient: f64,
    pub speed_kts: f64,
    pub open_water_m: f64,
    pub confined_m: f64,
    pub open_water_band: SquatBand,
    pub confined_band: SquatBand,
}

/// Dynamic under-keel clearance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnderKeelClearance {
    /// Depth minus draft, vessel stopped
    pub static_m: f64,
    pub open_water_m: f64,
    pub confined_m: f64,
}

pub fn squat_open_water(block_coefficient: f64, speed_kts: f64) -> f64 {
    block_coefficient * speed_kts * speed_kts / 100.0
}

pub fn squat_confined(block_coefficient: f64, speed_kts: f64) -> f64 {
    2.0 * squat_open_water(block_coefficient, speed_kts)
}

/// Water left under the keel
pub fn under_keel_clearance(depth_m: f64, draft_m: f64, squat_m: f64) -> f64 {
    depth_m - draft_m - squat_m
}

impl SquatEstimate {
    pub fn new(block_coefficient: f64, speed_kts: f64) -> Self {
        Self::with_thresholds(block_coefficient, speed_kts, SQUAT_ELEVATED_M, SQUAT_CRITICAL_M)
    }

    pub fn with_thresholds(
        block_coefficient: f64,
        speed_kts: f64,
        elevated_m: f64,
        critical_m: f64,
    ) -> Self {
        let open_water_m = squat_open_water(block_coefficient, speed_kts);
        let confined_m = squat_confined(block_coefficient, speed_kts);
        let confined_band = SquatBand::classify_with(confined_m, elevated_m, critical_m);

        if confined_band == SquatBand::Critical {
            log::debug!(
                "critical confined squat {:.2} m at {} kt (Cb {})",
                confined_m,
                speed_kts,
                block_coefficient
            );
        }

        Self {
            block_coefficient,
            speed_kts,
            open_water_m,
            confined_m,
            open_water_band: SquatBand::classify_with(open_water_m, elevated_m, critical_m),
            confined_band,
        }
    }

    pub fn clearance_in(&self, depth_m: f64, draft_m: f64) -> UnderKeelClearance {
        UnderKeelClearance {
            static_m: under_keel_clearance(depth_m, draft_m, 0.0),
            open_water_m: under_keel_clearance(depth_m, draft_m, self.open_water_m),
            confined_m: under_keel_clearance(depth_m, draft_m, self.confined_m),
        }
    }
}
