//! pf-results: presentation bundle for analysis results.
//!
//! Turns an [`AnalysisReport`](pf_analysis::AnalysisReport) into what the
//! editor displays: aggregate totals, chart series and a manifest keyed by a
//! content fingerprint of the inputs.

pub mod charts;
pub mod hash;
pub mod totals;
pub mod types;

pub use charts::{ChartSeries, Dataset, chart_series};
pub use hash::compute_analysis_id;
pub use totals::Totals;
pub use types::*;

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
