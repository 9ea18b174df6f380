//! Error types for analysis passes.

use pf_chem::ChemError;
use pf_core::{NodeId, PfError};
use serde::Serialize;
use thiserror::Error;

/// Why a single node could not be evaluated by a pass.
///
/// A failure never aborts the run; the node is reported and skipped.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum FailureReason {
    /// A formula input lies outside the range where the formula is defined.
    #[error("Domain error for {what}: {value}")]
    DomainError { what: &'static str, value: f64 },

    /// An intermediate or final value overflowed or became NaN.
    #[error("Non-finite result for {what}")]
    NonFinite { what: &'static str },

    /// Reference-data or correlation failure from the chemistry layer.
    #[error("Chemistry error: {message}")]
    Chemistry { message: String },
}

impl FailureReason {
    /// Stable machine-readable reason code.
    pub fn code(&self) -> &'static str {
        match self {
            FailureReason::DomainError { .. } => "domain_error",
            FailureReason::NonFinite { .. } => "non_finite",
            FailureReason::Chemistry { .. } => "chemistry",
        }
    }
}

impl From<ChemError> for FailureReason {
    fn from(err: ChemError) -> Self {
        match err {
            ChemError::Domain { what, value } => FailureReason::DomainError { what, value },
            ChemError::NonFinite { what } => FailureReason::NonFinite { what },
            other => FailureReason::Chemistry {
                message: other.to_string(),
            },
        }
    }
}

/// A failed node entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeFailure {
    pub id: NodeId,
    #[serde(flatten)]
    pub reason: FailureReason,
}

/// Errors that stop an analysis run before any pass executes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("Invalid configuration: {what} = {value}")]
    InvalidConfig { what: &'static str, value: f64 },

    #[error("Unknown analysis pass: {key}")]
    UnknownPass { key: String },
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;

impl From<AnalysisError> for PfError {
    fn from(e: AnalysisError) -> Self {
        match e {
            AnalysisError::InvalidConfig { what, value } => PfError::OutOfRange { what, value },
            AnalysisError::UnknownPass { .. } => PfError::InvalidArg {
                what: "analysis pass",
            },
        }
    }
}

/// Ensure a value is finite, reporting a node failure if not.
pub(crate) fn check_finite(value: f64, what: &'static str) -> Result<f64, FailureReason> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FailureReason::NonFinite { what })
    }
}
