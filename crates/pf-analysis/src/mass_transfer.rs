//! Mass transfer pass: `flux = k · |y - x| · flow` for contacting columns.

use pf_core::NodeId;
use pf_graph::{EquipmentNode, FlowsheetSnapshot};
use serde::Serialize;

use crate::config::{AnalysisConfig, MassTransferConfig};
use crate::error::{FailureReason, check_finite};
use crate::outcome::{NodeOutcome, PassOutput};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MassTransferRecord {
    pub id: NodeId,
    pub mass_flux: f64,
    pub transfer_coefficient: f64,
    pub driving_force: f64,
}

pub fn evaluate(
    node: &EquipmentNode,
    config: &MassTransferConfig,
) -> Result<MassTransferRecord, FailureReason> {
    let driving_force = node
        .composition()
        .phase_split()
        .map_or(0.0, |split| split.driving_force());
    let mass_flux = check_finite(
        config.transfer_coefficient * driving_force * node.flow_rate(),
        "mass flux",
    )?;

    Ok(MassTransferRecord {
        id: node.id().clone(),
        mass_flux,
        transfer_coefficient: config.transfer_coefficient,
        driving_force,
    })
}

/// Run mass transfer over distillation columns, absorbers and extractors.
pub fn run(snapshot: &FlowsheetSnapshot, config: &AnalysisConfig) -> PassOutput<MassTransferRecord> {
    let outcomes = snapshot
        .nodes()
        .iter()
        .filter(|node| node.kind().supports_mass_transfer())
        .map(|node| NodeOutcome::from_result(node.id(), evaluate(node, &config.mass_transfer)))
        .collect();
    PassOutput::new(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_chem::{Composition, PhaseSplit};
    use pf_graph::{EquipmentKind, ProcessConditions};

    fn absorber(split: Option<PhaseSplit>) -> EquipmentNode {
        let mut composition = Composition::default();
        if let Some(split) = split {
            composition = composition.with_phase_split(split);
        }
        EquipmentNode::with_defaults(
            "abs",
            EquipmentKind::Absorber,
            "Absorber",
            ProcessConditions::new(25.0, 1.0, 20.0).with_composition(composition),
        )
        .unwrap()
    }

    #[test]
    fn flux_from_phase_split() {
        let r = evaluate(
            &absorber(Some(PhaseSplit::new(0.75, 0.25))),
            &MassTransferConfig::default(),
        )
        .unwrap();
        assert_eq!(r.driving_force, 0.5);
        assert_eq!(r.transfer_coefficient, 0.05);
        assert!((r.mass_flux - 0.05 * 0.5 * 20.0).abs() < 1e-12);
    }

    #[test]
    fn no_split_means_no_driving_force() {
        let r = evaluate(&absorber(None), &MassTransferConfig::default()).unwrap();
        assert_eq!(r.driving_force, 0.0);
        assert_eq!(r.mass_flux, 0.0);
    }

    #[test]
    fn flash_drums_are_skipped() {
        let flash = EquipmentNode::with_defaults(
            "f",
            EquipmentKind::Flash,
            "Flash",
            ProcessConditions::new(25.0, 1.0, 1.0),
        )
        .unwrap();
        let snap = FlowsheetSnapshot::new(vec![flash, absorber(None)], vec![]).unwrap();
        let out = run(&snap, &AnalysisConfig::default());
        assert_eq!(out.len(), 1);
    }
}
