//! Error types for the pf-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the engine crates
/// and gives the CLI one error to report.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Flowsheet error: {0}")]
    Project(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unsupported file extension: {path}")]
    UnknownFormat { path: PathBuf },

    #[error("Snapshot compilation failed: {0}")]
    Compile(String),

    #[error("Analysis error: {0}")]
    Analysis(String),

    #[error("Results error: {0}")]
    Results(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for pf-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<pf_project::ProjectError> for AppError {
    fn from(err: pf_project::ProjectError) -> Self {
        AppError::Project(err.to_string())
    }
}

impl From<pf_graph::GraphError> for AppError {
    fn from(err: pf_graph::GraphError) -> Self {
        AppError::Compile(err.to_string())
    }
}

impl From<pf_analysis::AnalysisError> for AppError {
    fn from(err: pf_analysis::AnalysisError) -> Self {
        AppError::Analysis(err.to_string())
    }
}

impl From<pf_results::ResultsError> for AppError {
    fn from(err: pf_results::ResultsError) -> Self {
        AppError::Results(err.to_string())
    }
}
