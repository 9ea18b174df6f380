//! Shared application service layer for procflow.
//!
//! This crate sits between the engine crates and the CLI: it loads flowsheet
//! files, compiles them into snapshots, runs the analysis passes and bundles
//! the results. It is also the only layer that logs.

pub mod analysis_service;
pub mod error;
pub mod project_service;
pub mod snapshot_compile;

// Re-export key types for convenience
pub use analysis_service::{
    AnalysisRequest, analyze_path, resolve_config, run_analysis, run_snapshot,
};
pub use error::{AppError, AppResult};
pub use project_service::{
    FileFormat, FlowsheetSummary, list_chemicals, list_kinds, load_config, load_flowsheet,
    save_flowsheet, summarize,
};
pub use snapshot_compile::compile_flowsheet;
