//! Error types for the opt-in validation layer

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a caller-supplied input is rejected
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum NavigationError {
    #[error("invalid latitude {value}: must be between -90 and 90 degrees")]
    InvalidLatitude { value: f64 },

    #[error("invalid longitude {value}: must be between -180 and 180 degrees")]
    InvalidLongitude { value: f64 },

    #[error("invalid {parameter} = {value}: {reason}")]
    InvalidParameter {
        parameter: String,
        value: String,
        reason: String,
    },

    #[error("non-finite value for {parameter}")]
    NonFinite { parameter: String },
}

impl NavigationError {
    pub fn invalid_parameter(parameter: &str, value: impl ToString, reason: &str) -> Self {
        NavigationError::InvalidParameter {
            parameter: parameter.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type NavigationResult<T> = Result<T, NavigationError>;
