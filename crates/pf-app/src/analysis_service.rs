//! Analysis execution: compile, run the selected passes, bundle the results.

use std::path::Path;

use pf_analysis::{AnalysisConfig, AnalysisReport, PassKind, PassSet, analyze, analyze_parallel};
use pf_graph::FlowsheetSnapshot;
use pf_project::schema::FlowsheetFile;
use pf_results::ResultsBundle;

use crate::error::AppResult;
use crate::project_service;
use crate::snapshot_compile::compile_flowsheet;

/// What to run and how.
#[derive(Debug, Clone, Default)]
pub struct AnalysisRequest {
    pub passes: PassSet,
    /// Run passes concurrently on the rayon pool.
    pub parallel: bool,
    /// Overrides the configuration embedded in the flowsheet file.
    pub config: Option<AnalysisConfig>,
}

/// Configuration precedence: request, then file, then defaults.
pub fn resolve_config(file: &FlowsheetFile, request: &AnalysisRequest) -> AnalysisConfig {
    request
        .config
        .clone()
        .or_else(|| file.config.clone())
        .unwrap_or_default()
}

/// Run an analysis on an already compiled snapshot.
pub fn run_snapshot(
    snapshot: &FlowsheetSnapshot,
    config: &AnalysisConfig,
    request: &AnalysisRequest,
) -> AppResult<ResultsBundle> {
    let report = if request.parallel {
        analyze_parallel(snapshot, config, request.passes)?
    } else {
        analyze(snapshot, config, request.passes)?
    };
    log_report(&report);

    let bundle = ResultsBundle::new(snapshot, config, report)?;
    tracing::info!(
        analysis_id = %bundle.manifest.analysis_id,
        nodes = bundle.manifest.node_count,
        streams = bundle.manifest.stream_count,
        parallel = request.parallel,
        "analysis finished"
    );
    Ok(bundle)
}

/// Compile a flowsheet file and analyze it.
pub fn run_analysis(file: &FlowsheetFile, request: &AnalysisRequest) -> AppResult<ResultsBundle> {
    let snapshot = compile_flowsheet(file)?;
    let config = resolve_config(file, request);
    tracing::debug!(name = %file.name, "compiled flowsheet");
    run_snapshot(&snapshot, &config, request)
}

/// Load a flowsheet from disk and analyze it.
pub fn analyze_path(path: &Path, request: &AnalysisRequest) -> AppResult<ResultsBundle> {
    let file = project_service::load_flowsheet(path)?;
    run_analysis(&file, request)
}

fn log_report(report: &AnalysisReport) {
    for kind in PassKind::ALL {
        if let Some(entries) = report.entry_count(kind) {
            tracing::debug!(pass = %kind, entries, "pass complete");
        }
    }
    for warning in &report.warnings {
        tracing::warn!("{}", warning);
    }
    for (kind, failure) in report.failures() {
        tracing::warn!(
            pass = %kind,
            node = %failure.id,
            code = failure.reason.code(),
            "node failed: {}",
            failure.reason
        );
    }
}
