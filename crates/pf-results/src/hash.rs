//! Content-based fingerprint for analysis runs.

use pf_analysis::AnalysisConfig;
use pf_graph::FlowsheetSnapshot;
use sha2::{Digest, Sha256};

use crate::ResultsResult;

/// SHA-256 over the snapshot, the configuration and the engine version.
///
/// Equal inputs always give the same id, so a cached bundle can be reused.
pub fn compute_analysis_id(
    snapshot: &FlowsheetSnapshot,
    config: &AnalysisConfig,
    engine_version: &str,
) -> ResultsResult<String> {
    let mut hasher = Sha256::new();

    let snapshot_json = serde_json::to_string(snapshot)?;
    hasher.update(snapshot_json.as_bytes());

    let config_json = serde_json::to_string(config)?;
    hasher.update(config_json.as_bytes());

    hasher.update(engine_version.as_bytes());

    let result = hasher.finalize();
    Ok(format!("{:x}", result))
}
