//! Flowsheet-wide sums over successfully computed nodes.

use pf_analysis::{AnalysisReport, PassOutput};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub in_flow: f64,
    pub out_flow: f64,
    pub accumulation: f64,
    pub in_energy: f64,
    pub out_energy: f64,
    pub heat_duty: f64,
    pub mass_flux: f64,
    pub pressure_drop: f64,
    /// Failed entries across all passes; their values are not in the sums.
    pub failed_entries: usize,
    pub warnings: usize,
}

fn sum<T>(output: &Option<PassOutput<T>>, value: impl Fn(&T) -> f64) -> f64 {
    output.iter().flat_map(|o| o.computed()).map(value).sum()
}

impl Totals {
    pub fn from_report(report: &AnalysisReport) -> Self {
        Self {
            in_flow: sum(&report.mass_balance, |r| r.in_flow),
            out_flow: sum(&report.mass_balance, |r| r.out_flow),
            accumulation: sum(&report.mass_balance, |r| r.accumulation),
            in_energy: sum(&report.energy_balance, |r| r.in_energy),
            out_energy: sum(&report.energy_balance, |r| r.out_energy),
            heat_duty: sum(&report.heat_transfer, |r| r.heat_duty),
            mass_flux: sum(&report.mass_transfer, |r| r.mass_flux),
            pressure_drop: sum(&report.pressure_drop, |r| r.delta_p),
            failed_entries: report.failures().len(),
            warnings: report.warnings.len(),
        }
    }
}
