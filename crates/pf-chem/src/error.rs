//! Chemistry and correlation errors.

use pf_core::{ChemicalId, PfError};
use thiserror::Error;

/// Result type for chemistry operations.
pub type ChemResult<T> = Result<T, ChemError>;

/// Errors raised by reference-data lookups and correlations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChemError {
    /// A correlation input fell outside the range where the formula is defined.
    #[error("Domain error for {what}: {value}")]
    Domain { what: &'static str, value: f64 },

    /// Non-physical values (negative fractions, empty mixtures, ...).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// A correlation produced NaN or infinity.
    #[error("Non-finite result for {what}")]
    NonFinite { what: &'static str },

    #[error("Unknown chemical: {id}")]
    UnknownChemical { id: ChemicalId },

    #[error("Duplicate chemical id: {id}")]
    DuplicateChemical { id: ChemicalId },
}

impl From<ChemError> for PfError {
    fn from(err: ChemError) -> Self {
        match err {
            ChemError::Domain { what, value } => PfError::OutOfRange { what, value },
            ChemError::NonPhysical { what } => PfError::InvalidArg { what },
            ChemError::NonFinite { what } => PfError::NonFinite {
                what,
                value: f64::NAN,
            },
            other => PfError::Invariant {
                what: other.to_string(),
            },
        }
    }
}
