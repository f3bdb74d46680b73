//! Hull and stability analytics

pub mod draft_survey;
pub mod stability;

pub use draft_survey::{
    cargo_on_board, density_corrected_displacement, first_trim_correction, Deductible,
    DraftAnalysis, DraftReadings, DraftSurvey, DraftSurveyReport, HullDeflection, HullGeometry,
    HydrostaticLookup,
};
pub use stability::{gz_curve, GzPoint, StabilityAssessment, StabilityCondition};
