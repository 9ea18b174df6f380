//! Chart series for the editor's analysis panel.
//!
//! Category labels are node ids. Only computed entries are plotted.

use pf_analysis::{AnalysisReport, EnergyBalanceRecord, MassBalanceRecord, PassOutput, VleRecord};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub title: String,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartSeries {
    fn from_output<T>(
        title: &str,
        output: &PassOutput<T>,
        label: impl Fn(&T) -> String,
        columns: &[(&str, &dyn Fn(&T) -> f64)],
    ) -> Self {
        let records: Vec<&T> = output.computed().collect();
        Self {
            title: title.to_string(),
            labels: records.iter().map(|r| label(r)).collect(),
            datasets: columns
                .iter()
                .map(|(name, value)| Dataset {
                    label: name.to_string(),
                    data: records.iter().map(|r| value(r)).collect(),
                })
                .collect(),
        }
    }
}

/// Series for every pass in the report that has something to plot.
pub fn chart_series(report: &AnalysisReport) -> Vec<ChartSeries> {
    let mut charts = Vec::new();

    if let Some(output) = &report.mass_balance {
        charts.push(ChartSeries::from_output(
            "Mass Balance",
            output,
            |r| r.id.to_string(),
            &[
                ("Input Flow (kg/h)", &|r: &MassBalanceRecord| r.in_flow),
                ("Output Flow (kg/h)", &|r: &MassBalanceRecord| r.out_flow),
            ],
        ));
    }

    if let Some(output) = &report.energy_balance {
        charts.push(ChartSeries::from_output(
            "Energy Balance",
            output,
            |r| r.id.to_string(),
            &[
                ("Energy In (kJ/h)", &|r: &EnergyBalanceRecord| r.in_energy),
                ("Energy Out (kJ/h)", &|r: &EnergyBalanceRecord| r.out_energy),
            ],
        ));
    }

    if let Some(output) = &report.vle {
        charts.push(ChartSeries::from_output(
            "VLE",
            output,
            |r| r.id.to_string(),
            &[
                ("Vapor Pressure", &|r: &VleRecord| r.vapor_pressure),
                ("Equilibrium Constant (K)", &|r: &VleRecord| r.equilibrium_constant),
            ],
        ));
    }

    charts
}
