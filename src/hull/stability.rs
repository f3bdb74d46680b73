//! Intact stability check
//!
//! Fluid GM is the solid GM reduced by the free surface correction
//! (total free surface moment over displacement). The GZ curve is the
//! wall-sided approximation `GZ = GM · sin θ`, good enough for a quick
//! visual check but not a substitute for cross curves.

use crate::core::{GZ_MAX_HEEL_DEG, GZ_STEP_DEG, MIN_FLUID_GM_M};
use serde::{Deserialize, Serialize};

/// Loaded condition as entered from the stability book
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StabilityCondition {
    /// Height of the centre of gravity above the keel, solid (meters)
    pub solid_kg: f64,
    /// Height of the metacentre above the keel (meters)
    pub km: f64,
    /// Displacement (tonnes)
    pub displacement: f64,
    /// Sum of free surface moments of slack tanks (tonne-meters)
    pub total_free_surface_moment: f64,
}

/// One sample of the righting-arm curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GzPoint {
    pub heel_deg: f64,
    /// Righting arm (meters)
    pub righting_arm_m: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StabilityAssessment {
    pub solid_gm: f64,
    pub free_surface_correction: f64,
    pub fluid_kg: f64,
    pub fluid_gm: f64,
    /// GM floor the condition was checked against (meters)
    pub minimum_gm: f64,
    /// Whether fluid GM meets the floor
    pub compliant: bool,
    /// GZ from 0° to 60° in 2° steps
    pub gz_curve: Vec<GzPoint>,
}

impl StabilityCondition {
    /// Assess against the IMO minimum fluid GM of 0.15 m
    pub fn assess(&self) -> StabilityAssessment {
        self.assess_with_minimum(MIN_FLUID_GM_M)
    }

    pub fn assess_with_minimum(&self, minimum_gm: f64) -> StabilityAssessment {
        let solid_gm = self.km - self.solid_kg;

        let free_surface_correction = if self.displacement > 0.0 {
            self.total_free_surface_moment / self.displacement
        } else {
            log::debug!("displacement {} t, free surface correction taken as zero", self.displacement);
            0.0
        };

        let fluid_kg = self.solid_kg + free_surface_correction;
        let fluid_gm = self.km - fluid_kg;
        let compliant = fluid_gm >= minimum_gm;

        if !compliant {
            log::warn!(
                "fluid GM {:.3} m below required {:.3} m",
                fluid_gm,
                minimum_gm
            );
        }

        StabilityAssessment {
            solid_gm,
            free_surface_correction,
            fluid_kg,
            fluid_gm,
            minimum_gm,
            compliant,
            gz_curve: gz_curve(fluid_gm),
        }
    }
}

impl StabilityAssessment {
    /// Largest righting arm on the sampled curve
    pub fn max_righting_arm(&self) -> Option<GzPoint> {
        self.gz_curve
            .iter()
            .copied()
            .max_by(|a, b| a.righting_arm_m.total_cmp(&b.righting_arm_m))
    }
}

/// Wall-sided GZ curve for a given GM
pub fn gz_curve(gm: f64) -> Vec<GzPoint> {
    (0..=GZ_MAX_HEEL_DEG)
        .step_by(GZ_STEP_DEG as usize)
        .map(|heel| {
            let heel_deg = heel as f64;
            GzPoint {
                heel_deg,
                righting_arm_m: gm * heel_deg.to_radians().sin(),
            }
        })
        .collect()
}
