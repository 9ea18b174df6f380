//! Bundle assembly over a small flowsheet.

use pf_analysis::{AnalysisConfig, PassKind, PassSet, analyze};
use pf_graph::{EquipmentKind, EquipmentNode, FlowsheetBuilder, ProcessConditions};
use pf_results::ResultsBundle;

fn run(passes: PassSet) -> ResultsBundle {
    let mut builder = FlowsheetBuilder::new();
    let feed = builder.add_node(
        EquipmentNode::with_defaults(
            "feed",
            EquipmentKind::FeedTank,
            "Feed",
            ProcessConditions::new(25.0, 1.0, 1.5),
        )
        .unwrap(),
    );
    let flash = builder.add_node(
        EquipmentNode::with_defaults(
            "flash",
            EquipmentKind::Flash,
            "Flash",
            ProcessConditions::new(100.0, 760.0, 1.5),
        )
        .unwrap(),
    );
    builder.connect_with_id("s1", &feed, &flash).unwrap();
    let snapshot = builder.build().unwrap();

    let config = AnalysisConfig::default();
    let report = analyze(&snapshot, &config, passes).unwrap();
    ResultsBundle::new(&snapshot, &config, report).unwrap()
}

#[test]
fn bundle_serializes_with_editor_keys() {
    let bundle = run(PassSet::all());
    let json: serde_json::Value = serde_json::from_str(&bundle.to_json_pretty().unwrap()).unwrap();

    for key in [
        "massBalance",
        "energyBalance",
        "vle",
        "heatTransfer",
        "massTransfer",
        "kinetics",
        "pressureDrop",
        "warnings",
        "totals",
        "charts",
        "manifest",
    ] {
        assert!(json.get(key).is_some(), "missing {key}");
    }

    let first = &json["massBalance"]["outcomes"][0];
    assert_eq!(first["status"], "computed");
    assert_eq!(first["id"], "feed");
    assert_eq!(first["outFlow"], 1.5);
    assert!(json["pressureDrop"]["outcomes"][0].get("deltaP").is_some());
}

#[test]
fn manifest_lists_the_passes_that_ran() {
    let bundle = run(PassSet::empty().with(PassKind::Vle));
    assert_eq!(bundle.manifest.passes, vec![PassKind::Vle]);
    assert_eq!(bundle.manifest.node_count, 2);
    assert_eq!(bundle.manifest.stream_count, 1);
    assert_eq!(bundle.manifest.analysis_id.len(), 64);
}

#[test]
fn same_inputs_same_id() {
    let a = run(PassSet::all());
    let b = run(PassSet::all());
    assert_eq!(a.manifest.analysis_id, b.manifest.analysis_id);
}
