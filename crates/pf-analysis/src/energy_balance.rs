//! Energy balance pass.
//!
//! Inbound energy uses each stream's recorded temperature; outbound energy
//! uses the node's own temperature, since a stream leaving a node is at the
//! node's conditions.

use pf_core::NodeId;
use pf_graph::{FlowsheetSnapshot, Incidence};
use serde::Serialize;

use crate::config::AnalysisConfig;
use crate::error::{FailureReason, check_finite};
use crate::heat_transfer;
use crate::mass_balance::missing_references;
use crate::outcome::{NodeOutcome, PassOutput};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyBalanceRecord {
    pub id: NodeId,
    pub in_energy: f64,
    pub out_energy: f64,
    /// `in_energy - out_energy`
    pub delta_e: f64,
    /// Heat duty, present only for heat exchangers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heat_transfer: Option<f64>,
}

fn evaluate(
    snapshot: &FlowsheetSnapshot,
    incidence: &Incidence,
    idx: usize,
    config: &AnalysisConfig,
) -> Result<EnergyBalanceRecord, FailureReason> {
    let node = &snapshot.nodes()[idx];
    let cp = node
        .heat_capacity()
        .unwrap_or(config.energy_balance.default_heat_capacity);

    let in_energy: f64 = incidence
        .inbound(idx)
        .iter()
        .map(|&s| {
            let stream = &snapshot.streams()[s];
            stream.flow_or_zero() * stream.temperature_or_zero() * cp
        })
        .sum();
    let out_energy: f64 = incidence
        .outbound(idx)
        .iter()
        .map(|&s| snapshot.streams()[s].flow_or_zero() * node.temperature_c() * cp)
        .sum();

    check_finite(in_energy, "inbound energy")?;
    check_finite(out_energy, "outbound energy")?;

    // A failed duty is reported by the heat transfer pass; the balance itself stands.
    let heat_transfer = if node.kind().is_heat_exchanger() {
        heat_transfer::evaluate(node, &config.heat_transfer)
            .ok()
            .map(|r| r.heat_duty)
    } else {
        None
    };

    Ok(EnergyBalanceRecord {
        id: node.id().clone(),
        in_energy,
        out_energy,
        delta_e: check_finite(in_energy - out_energy, "energy difference")?,
        heat_transfer,
    })
}

/// Run the energy balance over every node.
pub fn run(snapshot: &FlowsheetSnapshot, config: &AnalysisConfig) -> PassOutput<EnergyBalanceRecord> {
    let incidence = Incidence::build(snapshot);

    let outcomes = snapshot
        .nodes()
        .iter()
        .enumerate()
        .map(|(idx, node)| {
            NodeOutcome::from_result(node.id(), evaluate(snapshot, &incidence, idx, config))
        })
        .collect();

    PassOutput::new(outcomes).with_warnings(missing_references(&incidence))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_graph::{EquipmentKind, EquipmentNode, ProcessConditions, Stream};

    fn node(id: &str, kind: EquipmentKind, t: f64) -> EquipmentNode {
        EquipmentNode::with_defaults(id, kind, id, ProcessConditions::new(t, 1.0, 10.0)).unwrap()
    }

    #[test]
    fn uses_stream_temperature_in_and_node_temperature_out() {
        let snap = FlowsheetSnapshot::new(
            vec![
                node("a", EquipmentKind::FeedTank, 20.0),
                node("b", EquipmentKind::Mixer, 50.0),
                node("c", EquipmentKind::Tank, 30.0),
            ],
            vec![
                Stream::new("s1", "a", "b")
                    .with_total_flow(10.0)
                    .with_temperature(20.0),
                Stream::new("s2", "b", "c")
                    .with_total_flow(10.0)
                    .with_temperature(99.0),
            ],
        )
        .unwrap();
        let out = run(&snap, &AnalysisConfig::default());
        let b = out.outcomes[1].computed().unwrap();

        assert!((b.in_energy - 10.0 * 20.0 * 4.186).abs() < 1e-9);
        assert!((b.out_energy - 10.0 * 50.0 * 4.186).abs() < 1e-9);
        assert!((b.delta_e - (b.in_energy - b.out_energy)).abs() < 1e-9);
        assert_eq!(b.heat_transfer, None);
    }

    #[test]
    fn node_heat_capacity_overrides_default() {
        let b = EquipmentNode::with_defaults(
            "b",
            EquipmentKind::Tank,
            "b",
            ProcessConditions::new(25.0, 1.0, 1.0).with_heat_capacity(2.0),
        )
        .unwrap();
        let snap = FlowsheetSnapshot::new(
            vec![node("a", EquipmentKind::FeedTank, 20.0), b],
            vec![Stream::new("s", "a", "b").with_total_flow(3.0).with_temperature(10.0)],
        )
        .unwrap();
        let out = run(&snap, &AnalysisConfig::default());
        assert_eq!(out.outcomes[1].computed().unwrap().in_energy, 60.0);
    }

    #[test]
    fn missing_stream_temperature_is_zero() {
        let snap = FlowsheetSnapshot::new(
            vec![node("a", EquipmentKind::FeedTank, 20.0), node("b", EquipmentKind::Tank, 20.0)],
            vec![Stream::new("s", "a", "b").with_total_flow(3.0)],
        )
        .unwrap();
        let out = run(&snap, &AnalysisConfig::default());
        assert_eq!(out.outcomes[1].computed().unwrap().in_energy, 0.0);
    }

    #[test]
    fn heat_exchangers_report_duty() {
        let snap = FlowsheetSnapshot::new(
            vec![node("hx", EquipmentKind::ShellAndTube, 85.0)],
            vec![],
        )
        .unwrap();
        let out = run(&snap, &AnalysisConfig::default());
        let r = out.outcomes[0].computed().unwrap();
        assert_eq!(r.heat_transfer, Some(500.0 * 60.0 * 10.0));
        assert_eq!((r.in_energy, r.out_energy, r.delta_e), (0.0, 0.0, 0.0));
    }

    #[test]
    fn failed_duty_keeps_the_balance() {
        let hx = EquipmentNode::with_defaults(
            "hx",
            EquipmentKind::Plate,
            "hx",
            ProcessConditions::new(85.0, 1.0, 1.0e305),
        )
        .unwrap();
        let snap = FlowsheetSnapshot::new(
            vec![node("a", EquipmentKind::FeedTank, 20.0), hx],
            vec![Stream::new("s", "a", "hx").with_total_flow(2.0).with_temperature(20.0)],
        )
        .unwrap();
        let out = run(&snap, &AnalysisConfig::default());

        let r = out.outcomes[1].computed().unwrap();
        assert_eq!(r.heat_transfer, None);
        assert!((r.in_energy - 2.0 * 20.0 * 4.186).abs() < 1e-9);

        let duty = heat_transfer::run(&snap, &AnalysisConfig::default());
        assert!(duty.outcomes[1].is_failed());
    }
}
