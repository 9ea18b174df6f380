//! Pressure drop pass: Darcy-Weisbach with the Blasius friction factor.
//!
//! Every node is treated as a straight pipe of the configured geometry with
//! its flow rate taken as a volumetric rate.

use std::f64::consts::PI;

use pf_core::units::{Area, Pressure, Ratio, Velocity};
use pf_core::{NodeId, m3_per_s};
use pf_graph::{EquipmentNode, FlowsheetSnapshot};
use serde::Serialize;
use uom::si::ratio::ratio;

use crate::config::{AnalysisConfig, PressureDropConfig};
use crate::error::{FailureReason, check_finite};
use crate::outcome::{NodeOutcome, PassOutput};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PressureDropRecord {
    pub id: NodeId,
    /// Pa
    #[serde(rename = "deltaP")]
    pub delta_p: f64,
    pub reynolds_number: f64,
    pub friction_factor: f64,
    /// m/s
    pub velocity: f64,
}

/// Straight-pipe hydraulics at one flow rate, SI units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeFlow {
    pub delta_p: f64,
    pub reynolds_number: f64,
    pub friction_factor: f64,
    pub velocity: f64,
}

/// Blasius friction factor for smooth pipes, `0.316 / Re^0.25`.
pub fn blasius_friction_factor(reynolds: f64) -> f64 {
    0.316 / reynolds.powf(0.25)
}

/// Pressure drop for a volumetric flow rate in m³/s.
pub fn pressure_drop(
    config: &PressureDropConfig,
    flow_rate: f64,
) -> Result<PipeFlow, FailureReason> {
    let area: Area = config.diameter * config.diameter * (PI / 4.0);
    let velocity: Velocity = m3_per_s(flow_rate) / area;

    let reynolds: Ratio = config.density * velocity * config.diameter / config.viscosity;
    let reynolds = reynolds.get::<ratio>();
    if !(reynolds >= config.min_turbulent_reynolds) {
        return Err(FailureReason::DomainError {
            what: "Reynolds number",
            value: reynolds,
        });
    }

    let friction_factor = check_finite(blasius_friction_factor(reynolds), "friction factor")?;
    let delta_p: Pressure =
        config.length * config.density * velocity * velocity / (config.diameter * 2.0) * friction_factor;

    Ok(PipeFlow {
        delta_p: check_finite(delta_p.value, "pressure drop")?,
        reynolds_number: reynolds,
        friction_factor,
        velocity: velocity.value,
    })
}

pub fn evaluate(
    node: &EquipmentNode,
    config: &PressureDropConfig,
) -> Result<PressureDropRecord, FailureReason> {
    let flow = pressure_drop(config, node.flow_rate())?;
    Ok(PressureDropRecord {
        id: node.id().clone(),
        delta_p: flow.delta_p,
        reynolds_number: flow.reynolds_number,
        friction_factor: flow.friction_factor,
        velocity: flow.velocity,
    })
}

/// Run pressure drop over every node.
pub fn run(snapshot: &FlowsheetSnapshot, config: &AnalysisConfig) -> PassOutput<PressureDropRecord> {
    let outcomes = snapshot
        .nodes()
        .iter()
        .map(|node| NodeOutcome::from_result(node.id(), evaluate(node, &config.pressure_drop)))
        .collect();
    PassOutput::new(outcomes)
}
