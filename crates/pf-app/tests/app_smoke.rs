//! Smoke tests for the pf-app service layer against the demo flowsheets.

use std::path::PathBuf;

use pf_analysis::{AnalysisWarning, PassKind, PassSet};
use pf_app::{AnalysisRequest, analyze_path, load_flowsheet, save_flowsheet, summarize};

fn demo(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.pop(); // go to crates
    path.pop(); // go to repo root
    path.push("demos");
    path.push(name);
    path
}

#[test]
fn methanol_plant_end_to_end() {
    let path = demo("methanol_plant.yaml");
    let file = load_flowsheet(&path).expect("Failed to load demo");
    let summary = summarize(&file);
    assert_eq!(summary.node_count, 7);
    assert_eq!(summary.stream_count, 7);
    assert!(!summary.has_config);

    let bundle = analyze_path(&path, &AnalysisRequest::default()).unwrap();
    let report = &bundle.report;

    assert_eq!(report.entry_count(PassKind::MassBalance), Some(7));
    assert_eq!(report.entry_count(PassKind::Vle), Some(2));
    assert_eq!(report.entry_count(PassKind::HeatTransfer), Some(7));
    assert_eq!(report.entry_count(PassKind::MassTransfer), Some(1));
    assert_eq!(report.entry_count(PassKind::Kinetics), Some(1));
    assert!(report.failures().is_empty());

    // The purge line points at a flare that is not on the sheet.
    assert_eq!(report.warnings.len(), 1);
    let AnalysisWarning::MissingReference { stream, .. } = &report.warnings[0];
    assert_eq!(stream.as_str(), "purge");

    let flash = report
        .mass_balance
        .as_ref()
        .unwrap()
        .outcomes[4]
        .computed()
        .unwrap()
        .clone();
    assert_eq!(flash.id.as_str(), "flash");
    assert!((flash.in_flow - 0.8).abs() < 1e-12);
    // The purge line is dangling, so it counts on neither end.
    assert!((flash.out_flow - 0.5).abs() < 1e-12);
    assert!((flash.accumulation - 0.3).abs() < 1e-12);
    assert_eq!(bundle.totals.warnings, 1);
}

#[test]
fn water_flash_vapor_pressure() {
    let request = AnalysisRequest {
        passes: PassSet::empty().with(PassKind::Vle),
        ..AnalysisRequest::default()
    };
    let bundle = analyze_path(&demo("water_flash.json"), &request).unwrap();
    let vle = bundle.report.vle.unwrap();
    let flash = vle.outcomes[0].computed().unwrap();
    assert!((flash.vapor_pressure - 760.0).abs() < 7.6);
    assert!((flash.equilibrium_constant - flash.vapor_pressure).abs() < 1e-9);
}

#[test]
fn parallel_and_sequential_bundles_agree() {
    let path = demo("methanol_plant.yaml");
    let sequential = analyze_path(&path, &AnalysisRequest::default()).unwrap();
    let parallel = analyze_path(
        &path,
        &AnalysisRequest {
            parallel: true,
            ..AnalysisRequest::default()
        },
    )
    .unwrap();
    assert_eq!(sequential.report, parallel.report);
    assert_eq!(
        sequential.manifest.analysis_id,
        parallel.manifest.analysis_id
    );
}

#[test]
fn save_and_reload_as_json() {
    let file = load_flowsheet(&demo("methanol_plant.yaml")).unwrap();
    let out = std::env::temp_dir().join(format!("pf_app_smoke_{}.json", std::process::id()));
    save_flowsheet(&out, &file).unwrap();
    let reloaded = load_flowsheet(&out).unwrap();
    std::fs::remove_file(&out).ok();
    assert_eq!(reloaded, file);
}
