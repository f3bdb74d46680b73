//! Draft survey reduction
//!
//! Six draft readings (forward, midships and aft, each port and starboard)
//! are reduced to a quarter-mean draft, hull deflection and trim. The
//! displacement read from the hydrostatic tables at that draft is then
//! corrected for dock-water density, and cargo follows by deducting
//! lightship and the weights on board.

use crate::core::REFERENCE_DENSITY;
use serde::{Deserialize, Serialize};

/// Draft marks read on both sides at three stations (meters)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DraftReadings {
    pub forward_port: f64,
    pub forward_starboard: f64,
    pub midship_port: f64,
    pub midship_starboard: f64,
    pub aft_port: f64,
    pub aft_starboard: f64,
}

/// Hull particulars needed by the survey
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HullGeometry {
    /// Length between perpendiculars (meters)
    pub lbp: f64,
    /// Keel plate thickness added to the quarter mean (meters)
    pub keel_thickness: f64,
    /// Density of the water the vessel floats in (t/m³)
    pub dock_density: f64,
}

/// Values read from the vessel's hydrostatic tables at the survey draft
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HydrostaticLookup {
    /// Displacement in salt water of 1.025 t/m³ (tonnes)
    pub displacement: f64,
    /// Tonnes per centimetre immersion
    pub tpc: f64,
    /// Longitudinal centre of flotation from midships (meters, aft negative)
    pub lcf: f64,
    /// Moment to change trim one centimetre (tonne-meters)
    pub mtc: f64,
}

/// Bending of the hull girder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HullDeflection {
    /// Midships lower than the ends
    Sagging,
    /// Midships higher than the ends
    Hogging,
    Neutral,
}

impl HullDeflection {
    pub fn from_deformation(deformation: f64) -> Self {
        if deformation > 0.0 {
            HullDeflection::Sagging
        } else if deformation < 0.0 {
            HullDeflection::Hogging
        } else {
            HullDeflection::Neutral
        }
    }
}

/// Draft figures derived from the six readings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DraftAnalysis {
    pub mean_forward: f64,
    pub mean_midship: f64,
    pub mean_aft: f64,
    /// Mean of the forward and aft means
    pub mean_of_means: f64,
    /// (F + A + 6M) / 8 before keel correction
    pub quarter_mean: f64,
    /// Quarter mean plus keel thickness
    pub corrected_quarter_mean: f64,
    /// Mean midships minus mean of means
    pub deformation: f64,
    pub deflection: HullDeflection,
    /// Aft minus forward; positive when trimmed by the stern
    pub trim: f64,
}

/// Named weight on board that is not cargo (ballast, bunkers, stores...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deductible {
    pub name: String,
    pub tonnes: f64,
}

impl Deductible {
    pub fn new(name: impl Into<String>, tonnes: f64) -> Self {
        Self {
            name: name.into(),
            tonnes,
        }
    }
}

/// Complete draft survey input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftSurvey {
    pub readings: DraftReadings,
    pub hull: HullGeometry,
    pub hydrostatics: HydrostaticLookup,
    /// Lightship weight (tonnes)
    pub lightship: f64,
    pub deductibles: Vec<Deductible>,
}

/// Outcome of a draft survey
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DraftSurveyReport {
    pub analysis: DraftAnalysis,
    /// Table displacement corrected for dock-water density (tonnes)
    pub corrected_displacement: f64,
    /// First trim correction, informational (tonnes)
    pub first_trim_correction: f64,
    pub total_deductibles: f64,
    /// Cargo on board (tonnes)
    pub cargo: f64,
}

impl DraftReadings {
    /// All six marks reading the same draft
    pub fn level(draft: f64) -> Self {
        Self {
            forward_port: draft,
            forward_starboard: draft,
            midship_port: draft,
            midship_starboard: draft,
            aft_port: draft,
            aft_starboard: draft,
        }
    }

    pub fn analyse(&self, hull: &HullGeometry) -> DraftAnalysis {
        let mean_forward = (self.forward_port + self.forward_starboard) / 2.0;
        let mean_midship = (self.midship_port + self.midship_starboard) / 2.0;
        let mean_aft = (self.aft_port + self.aft_starboard) / 2.0;
        let mean_of_means = (mean_forward + mean_aft) / 2.0;

        // (F + A + 6M) / 8 rearranged so equal readings reduce exactly
        let deformation = mean_midship - mean_of_means;
        let quarter_mean = mean_of_means + 0.75 * deformation;

        DraftAnalysis {
            mean_forward,
            mean_midship,
            mean_aft,
            mean_of_means,
            quarter_mean,
            corrected_quarter_mean: quarter_mean + hull.keel_thickness,
            deformation,
            deflection: HullDeflection::from_deformation(deformation),
            trim: mean_aft - mean_forward,
        }
    }
}

/// Correct salt-water table displacement to the density the ship floats in
pub fn density_corrected_displacement(table_displacement: f64, dock_density: f64) -> f64 {
    table_displacement + table_displacement * (dock_density - REFERENCE_DENSITY) / REFERENCE_DENSITY
}

/// First trim correction `trim · LCF · TPC · 100 / LBP` (tonnes)
pub fn first_trim_correction(trim: f64, hydrostatics: &HydrostaticLookup, lbp: f64) -> f64 {
    if lbp <= 0.0 {
        return 0.0;
    }
    trim * hydrostatics.lcf * hydrostatics.tpc * 100.0 / lbp
}

/// Cargo left after lightship and deductible weights
pub fn cargo_on_board(corrected_displacement: f64, lightship: f64, deductibles: &[Deductible]) -> f64 {
    let total: f64 = deductibles.iter().map(|d| d.tonnes).sum();
    corrected_displacement - lightship - total
}

impl DraftSurvey {
    pub fn report(&self) -> DraftSurveyReport {
        let analysis = self.readings.analyse(&self.hull);
        let corrected_displacement =
            density_corrected_displacement(self.hydrostatics.displacement, self.hull.dock_density);
        let total_deductibles: f64 = self.deductibles.iter().map(|d| d.tonnes).sum();
        let cargo = cargo_on_board(corrected_displacement, self.lightship, &self.deductibles);

        log::debug!(
            "draft survey: quarter mean {:.3} m, {:?}, cargo {:.1} t",
            analysis.corrected_quarter_mean,
            analysis.deflection,
            cargo
        );

        DraftSurveyReport {
            analysis,
            corrected_displacement,
            first_trim_correction: first_trim_correction(
                analysis.trim,
                &self.hydrostatics,
                self.hull.lbp,
            ),
            total_deductibles,
            cargo,
        }
    }
}
