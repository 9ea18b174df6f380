//! Heat transfer pass: lumped `Q = U · ΔT · flow` per node.

use pf_core::NodeId;
use pf_graph::{EquipmentNode, FlowsheetSnapshot};
use serde::Serialize;

use crate::config::{AnalysisConfig, HeatTransferConfig};
use crate::error::{FailureReason, check_finite};
use crate::outcome::{NodeOutcome, PassOutput};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatTransferRecord {
    pub id: NodeId,
    pub heat_duty: f64,
    pub overall_coefficient: f64,
    /// Absolute difference to the reference temperature, K.
    pub delta_t: f64,
}

/// Evaluate one node.
///
/// The reference temperature is the node's own when it is a heat exchanger
/// that carries one, otherwise the configured default.
pub fn evaluate(
    node: &EquipmentNode,
    config: &HeatTransferConfig,
) -> Result<HeatTransferRecord, FailureReason> {
    let reference = node
        .detail()
        .reference_temperature_c()
        .unwrap_or(config.reference_temperature_c);

    let delta_t = check_finite((node.temperature_c() - reference).abs(), "temperature difference")?;
    let heat_duty = check_finite(
        config.overall_coefficient * delta_t * node.flow_rate(),
        "heat duty",
    )?;

    Ok(HeatTransferRecord {
        id: node.id().clone(),
        heat_duty,
        overall_coefficient: config.overall_coefficient,
        delta_t,
    })
}

/// Run heat transfer over every node.
pub fn run(snapshot: &FlowsheetSnapshot, config: &AnalysisConfig) -> PassOutput<HeatTransferRecord> {
    let outcomes = snapshot
        .nodes()
        .iter()
        .map(|node| NodeOutcome::from_result(node.id(), evaluate(node, &config.heat_transfer)))
        .collect();
    PassOutput::new(outcomes)
}
