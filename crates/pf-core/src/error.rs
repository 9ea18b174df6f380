//! Workspace-wide base error. Crate errors convert into it with `From`.

use thiserror::Error;

pub type PfResult<T> = Result<T, PfError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PfError {
    /// NaN or infinity where a finite number is required.
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    /// Finite, but outside the range a formula or parameter accepts.
    #[error("Value out of range for {what}: {value}")]
    OutOfRange { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Structural problem: duplicate ids, dangling ids, mismatched blocks.
    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_quantity() {
        let err = PfError::OutOfRange {
            what: "absolute temperature",
            value: -5.0,
        };
        assert_eq!(
            err.to_string(),
            "Value out of range for absolute temperature: -5"
        );

        let err = PfError::Invariant {
            what: "duplicate node id feed".to_string(),
        };
        assert!(err.to_string().contains("feed"));
    }
}
