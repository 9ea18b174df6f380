//! Result bundle types.

use pf_analysis::{AnalysisConfig, AnalysisReport, ENGINE_VERSION, PassKind};
use pf_graph::FlowsheetSnapshot;
use serde::{Deserialize, Serialize};

use crate::charts::{ChartSeries, chart_series};
use crate::hash::compute_analysis_id;
use crate::totals::Totals;
use crate::ResultsResult;

pub type AnalysisId = String;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisManifest {
    pub analysis_id: AnalysisId,
    pub timestamp: String,
    pub engine_version: String,
    pub node_count: usize,
    pub stream_count: usize,
    pub passes: Vec<PassKind>,
}

/// Everything the editor needs to display one analysis.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsBundle {
    pub manifest: AnalysisManifest,
    #[serde(flatten)]
    pub report: AnalysisReport,
    pub totals: Totals,
    pub charts: Vec<ChartSeries>,
}

impl ResultsBundle {
    /// Assemble a bundle for a finished report.
    pub fn new(
        snapshot: &FlowsheetSnapshot,
        config: &AnalysisConfig,
        report: AnalysisReport,
    ) -> ResultsResult<Self> {
        let manifest = AnalysisManifest {
            analysis_id: compute_analysis_id(snapshot, config, ENGINE_VERSION)?,
            timestamp: chrono::Utc::now().to_rfc3339(),
            engine_version: ENGINE_VERSION.to_string(),
            node_count: snapshot.nodes().len(),
            stream_count: snapshot.streams().len(),
            passes: PassKind::ALL
                .into_iter()
                .filter(|k| report.entry_count(*k).is_some())
                .collect(),
        };

        Ok(Self {
            manifest,
            totals: Totals::from_report(&report),
            charts: chart_series(&report),
            report,
        })
    }

    pub fn to_json_pretty(&self) -> ResultsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
