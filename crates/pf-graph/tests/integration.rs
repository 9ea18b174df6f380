//! Integration tests for pf-graph.

use pf_chem::{ChemicalTable, ComponentFraction, Composition};
use pf_core::NodeId;
use pf_graph::{
    EquipmentDetail, EquipmentKind, EquipmentNode, FlowsheetBuilder, FlowsheetSnapshot,
    GraphError, Incidence, Position, ProcessConditions, Stream, StreamEnd,
};
use proptest::prelude::*;

fn node(id: &str, kind: EquipmentKind, t: f64, flow: f64) -> EquipmentNode {
    EquipmentNode::with_defaults(id, kind, id, ProcessConditions::new(t, 1.0, flow)).unwrap()
}

#[test]
fn feed_mixer_chain() {
    // Build: F1 -> M <- F2, M -> P
    let mut builder = FlowsheetBuilder::new();
    let f1 = builder.add_node(node("f1", EquipmentKind::FeedTank, 25.0, 60.0));
    let f2 = builder.add_node(node("f2", EquipmentKind::FeedTank, 40.0, 40.0));
    let m = builder.add_node(node("m", EquipmentKind::Mixer, 30.0, 100.0));
    let p = builder.add_node(node("p", EquipmentKind::StorageTank, 30.0, 100.0));
    builder.connect_with_id("s1", &f1, &m).unwrap();
    builder.connect_with_id("s2", &f2, &m).unwrap();
    builder.connect_with_id("s3", &m, &p).unwrap();

    let snap = builder.build().unwrap();
    let inc = Incidence::build(&snap);

    let mi = snap.node_index(&m).unwrap();
    assert_eq!(inc.inbound(mi).len(), 2);
    assert_eq!(inc.outbound(mi).len(), 1);

    let inflow: f64 = inc
        .inbound(mi)
        .iter()
        .map(|&s| snap.streams()[s].flow_or_zero())
        .sum();
    assert_eq!(inflow, 100.0);
    assert!(inc.unresolved().is_empty());
}

#[test]
fn generated_stream_ids_are_unique() {
    let mut builder = FlowsheetBuilder::new();
    let a = builder.add_node(node("a", EquipmentKind::FeedTank, 25.0, 1.0));
    let b = builder.add_node(node("b", EquipmentKind::Tank, 25.0, 1.0));
    let s1 = builder.connect(&a, &b).unwrap();
    let s2 = builder.connect(&a, &b).unwrap();
    assert_ne!(s1, s2);

    let snap = builder.build().unwrap();
    assert_eq!(snap.streams().len(), 2);
}

#[test]
fn editing_a_node_leaves_existing_streams_alone() {
    let mut builder = FlowsheetBuilder::new();
    let a = builder.add_node(node("a", EquipmentKind::FeedTank, 25.0, 10.0));
    let b = builder.add_node(node("b", EquipmentKind::ShellAndTube, 25.0, 10.0));
    builder.connect_with_id("old", &a, &b).unwrap();

    builder
        .update_conditions(&a, ProcessConditions::new(80.0, 2.0, 50.0))
        .unwrap();
    builder.connect_with_id("new", &a, &b).unwrap();

    let snap = builder.build().unwrap();
    assert_eq!(snap.streams()[0].total_flow, Some(10.0));
    assert_eq!(snap.streams()[1].total_flow, Some(50.0));
    assert_eq!(snap.streams()[1].temperature_c, Some(80.0));
}

#[test]
fn dangling_references_are_reported_not_rejected() {
    let snap = FlowsheetSnapshot::new(
        vec![node("a", EquipmentKind::Tank, 25.0, 5.0)],
        vec![
            Stream::new("in", "ghost", "a").with_total_flow(3.0),
            Stream::new("out", "a", "phantom").with_total_flow(2.0),
        ],
    )
    .unwrap();

    let inc = Incidence::build(&snap);
    assert!(inc.inbound(0).is_empty());
    assert!(inc.outbound(0).is_empty());

    let unresolved = inc.unresolved();
    assert_eq!(unresolved.len(), 2);
    assert_eq!(unresolved[0].node, NodeId::from("ghost"));
    assert_eq!(unresolved[0].end, StreamEnd::Source);
    assert_eq!(unresolved[1].node, NodeId::from("phantom"));
    assert_eq!(unresolved[1].end, StreamEnd::Target);
}

#[test]
fn kind_and_detail_must_agree() {
    let result = EquipmentNode::new(
        "hx",
        EquipmentKind::ShellAndTube,
        "HX",
        ProcessConditions::new(25.0, 1.0, 1.0),
        EquipmentDetail::Separation {
            efficiency: Some(0.5),
        },
    );
    assert!(matches!(result, Err(GraphError::ParamsMismatch { .. })));

    let ok = EquipmentNode::new(
        "hx",
        EquipmentKind::ShellAndTube,
        "HX",
        ProcessConditions::new(25.0, 1.0, 1.0),
        EquipmentDetail::HeatExchanger {
            heat_duty: Some(1500.0),
            reference_temperature_c: Some(20.0),
        },
    )
    .unwrap();
    assert_eq!(ok.detail().heat_duty(), Some(1500.0));
}

#[test]
fn negative_flow_is_accepted() {
    let n = EquipmentNode::with_defaults(
        "t",
        EquipmentKind::Tank,
        "Tank",
        ProcessConditions::new(25.0, 1.0, -5.0),
    );
    assert!(n.is_ok());
}

#[test]
fn chemical_nodes_feed_the_flowsheet() {
    let table = ChemicalTable::builtin();
    let water = table.get(&"water".into()).unwrap();

    let mut builder = FlowsheetBuilder::new();
    let feed = builder
        .add_chemical_node(water, Position { x: 0.0, y: 0.0 })
        .unwrap();
    let flash = builder.add_node(
        EquipmentNode::with_defaults(
            "flash",
            EquipmentKind::Flash,
            "Flash",
            ProcessConditions::new(100.0, 760.0, 10.0).with_composition(Composition::new(vec![
                ComponentFraction::new("water", 1.0),
            ])),
        )
        .unwrap(),
    );
    builder.connect(&feed, &flash).unwrap();

    let snap = builder.build().unwrap();
    let stream = &snap.streams()[0];
    assert_eq!(stream.composition, Composition::pure("water"));
    assert_eq!(stream.total_flow, Some(0.0));
}

proptest! {
    // Endpoints 0..4 exist; 4 and 5 name nodes that are not on the sheet.
    #[test]
    fn incidence_lists_each_resolved_stream_once(
        ends in prop::collection::vec((0usize..6, 0usize..6), 0..16),
    ) {
        let nodes: Vec<_> = (0..4)
            .map(|i| node(&format!("n{i}"), EquipmentKind::Tank, 25.0, 1.0))
            .collect();
        let streams: Vec<_> = ends
            .iter()
            .enumerate()
            .map(|(i, (src, tgt))| Stream::new(format!("s{i}"), format!("n{src}"), format!("n{tgt}")))
            .collect();
        let snapshot = FlowsheetSnapshot::new(nodes, streams).unwrap();
        let incidence = Incidence::build(&snapshot);

        for (s_idx, &(src, tgt)) in ends.iter().enumerate() {
            let count_in = (0..4).map(|n| incidence.inbound(n).iter().filter(|&&s| s == s_idx).count()).sum::<usize>();
            let count_out = (0..4).map(|n| incidence.outbound(n).iter().filter(|&&s| s == s_idx).count()).sum::<usize>();

            if src < 4 && tgt < 4 {
                prop_assert_eq!(count_in, 1);
                prop_assert_eq!(count_out, 1);
                prop_assert!(incidence.inbound(tgt).contains(&s_idx));
                prop_assert!(incidence.outbound(src).contains(&s_idx));
            } else {
                prop_assert_eq!(count_in, 0);
                prop_assert_eq!(count_out, 0);
            }

            let stream_id = format!("s{s_idx}");
            let unresolved_ends: Vec<StreamEnd> = incidence
                .unresolved()
                .iter()
                .filter(|r| r.stream.as_str() == stream_id)
                .map(|r| r.end)
                .collect();
            prop_assert_eq!(unresolved_ends.contains(&StreamEnd::Source), src >= 4);
            prop_assert_eq!(unresolved_ends.contains(&StreamEnd::Target), tgt >= 4);
        }

        let expected = ends.iter().map(|&(s, t)| usize::from(s >= 4) + usize::from(t >= 4)).sum::<usize>();
        prop_assert_eq!(incidence.unresolved().len(), expected);
    }
}
