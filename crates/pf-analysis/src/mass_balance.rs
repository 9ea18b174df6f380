//! Mass balance pass.

use pf_chem::Composition;
use pf_core::NodeId;
use pf_graph::{FlowsheetSnapshot, Incidence};
use serde::Serialize;

use crate::config::AnalysisConfig;
use crate::error::{FailureReason, check_finite};
use crate::outcome::{AnalysisWarning, NodeOutcome, PassOutput};

/// Flow into and out of one node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MassBalanceRecord {
    pub id: NodeId,
    pub in_flow: f64,
    pub out_flow: f64,
    /// `in_flow - out_flow`; positive means material builds up in the node.
    pub accumulation: f64,
    pub components: Composition,
}

/// Sum the total flow of the streams at the given indices. Missing flow counts as zero.
pub(crate) fn total_flow(snapshot: &FlowsheetSnapshot, streams: &[usize]) -> f64 {
    streams
        .iter()
        .map(|&s| snapshot.streams()[s].flow_or_zero())
        .sum()
}

pub(crate) fn missing_references(incidence: &Incidence) -> Vec<AnalysisWarning> {
    incidence
        .unresolved()
        .iter()
        .map(AnalysisWarning::from)
        .collect()
}

fn evaluate(
    snapshot: &FlowsheetSnapshot,
    incidence: &Incidence,
    idx: usize,
) -> Result<MassBalanceRecord, FailureReason> {
    let node = &snapshot.nodes()[idx];
    let in_flow = check_finite(total_flow(snapshot, incidence.inbound(idx)), "inbound flow")?;
    let out_flow = check_finite(total_flow(snapshot, incidence.outbound(idx)), "outbound flow")?;

    Ok(MassBalanceRecord {
        id: node.id().clone(),
        in_flow,
        out_flow,
        accumulation: check_finite(in_flow - out_flow, "accumulation")?,
        components: node.composition().clone(),
    })
}

/// Run the mass balance over every node.
pub fn run(snapshot: &FlowsheetSnapshot, _config: &AnalysisConfig) -> PassOutput<MassBalanceRecord> {
    let incidence = Incidence::build(snapshot);

    let outcomes = snapshot
        .nodes()
        .iter()
        .enumerate()
        .map(|(idx, node)| NodeOutcome::from_result(node.id(), evaluate(snapshot, &incidence, idx)))
        .collect();

    PassOutput::new(outcomes).with_warnings(missing_references(&incidence))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_graph::{EquipmentKind, EquipmentNode, ProcessConditions, Stream};
    use proptest::prelude::*;

    fn node(id: &str) -> EquipmentNode {
        EquipmentNode::with_defaults(
            id,
            EquipmentKind::Tank,
            id,
            ProcessConditions::new(25.0, 1.0, 0.0),
        )
        .unwrap()
    }

    fn record(output: &PassOutput<MassBalanceRecord>, i: usize) -> &MassBalanceRecord {
        output.outcomes[i].computed().unwrap()
    }

    #[test]
    fn isolated_node_is_zero() {
        let snap = FlowsheetSnapshot::new(vec![node("feed")], vec![]).unwrap();
        let out = run(&snap, &AnalysisConfig::default());
        let r = record(&out, 0);
        assert_eq!((r.in_flow, r.out_flow, r.accumulation), (0.0, 0.0, 0.0));
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn single_stream() {
        let snap = FlowsheetSnapshot::new(
            vec![node("a"), node("b")],
            vec![Stream::new("s", "a", "b").with_total_flow(100.0)],
        )
        .unwrap();
        let out = run(&snap, &AnalysisConfig::default());

        let a = record(&out, 0);
        assert_eq!((a.in_flow, a.out_flow, a.accumulation), (0.0, 100.0, -100.0));
        let b = record(&out, 1);
        assert_eq!((b.in_flow, b.out_flow, b.accumulation), (100.0, 0.0, 100.0));
    }

    #[test]
    fn missing_flow_counts_as_zero() {
        let snap = FlowsheetSnapshot::new(
            vec![node("a"), node("b")],
            vec![
                Stream::new("s1", "a", "b"),
                Stream::new("s2", "a", "b").with_total_flow(4.0),
            ],
        )
        .unwrap();
        let out = run(&snap, &AnalysisConfig::default());
        assert_eq!(record(&out, 1).in_flow, 4.0);
    }

    #[test]
    fn dangling_stream_warns_and_contributes_nothing() {
        let snap = FlowsheetSnapshot::new(
            vec![node("a")],
            vec![Stream::new("s", "ghost", "a").with_total_flow(7.0)],
        )
        .unwrap();
        let out = run(&snap, &AnalysisConfig::default());
        assert_eq!(record(&out, 0).in_flow, 0.0);
        assert_eq!(out.warnings.len(), 1);
    }

    #[test]
    fn overflowing_flows_fail_the_node() {
        let streams = (0..4)
            .map(|i| Stream::new(format!("s{i}"), "a", "b").with_total_flow(1.0e308))
            .collect();
        let snap = FlowsheetSnapshot::new(vec![node("a"), node("b"), node("c")], streams).unwrap();
        let out = run(&snap, &AnalysisConfig::default());

        let failed: Vec<_> = out.failures().map(|f| f.id.as_str()).collect();
        assert_eq!(failed, vec!["a", "b"]);
        assert_eq!(
            out.outcomes[0].failure().unwrap().reason,
            FailureReason::NonFinite {
                what: "outbound flow"
            }
        );
        assert_eq!(record(&out, 2).accumulation, 0.0);
        assert!(out.computed().all(|r| r.accumulation.is_finite()));
    }

    proptest! {
        #[test]
        fn accumulation_identity(
            flows in prop::collection::vec(-1.0e6f64..1.0e6, 0..12),
            targets in prop::collection::vec(0usize..4, 12),
            sources in prop::collection::vec(0usize..4, 12),
        ) {
            let nodes: Vec<_> = (0..4).map(|i| node(&format!("n{i}"))).collect();
            let streams = flows
                .iter()
                .enumerate()
                .map(|(i, &f)| {
                    Stream::new(
                        format!("s{i}"),
                        format!("n{}", sources[i]),
                        format!("n{}", targets[i]),
                    )
                    .with_total_flow(f)
                })
                .collect();
            let snap = FlowsheetSnapshot::new(nodes, streams).unwrap();
            let out = run(&snap, &AnalysisConfig::default());

            for r in out.computed() {
                prop_assert!((r.accumulation - (r.in_flow - r.out_flow)).abs() <= 1e-9);
            }

            let total: f64 = out.computed().map(|r| r.accumulation).sum();
            prop_assert!(total.abs() <= 1e-6 * (1.0 + flows.iter().map(|f| f.abs()).sum::<f64>()));
        }
    }
}
