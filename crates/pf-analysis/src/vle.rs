//! Vapor-liquid equilibrium pass.
//!
//! Applies to distillation columns, flash drums and evaporators. The vapor
//! pressure comes from the configured Antoine fit (water by default), and the
//! equilibrium ratio is `K = P_sat / P` with the node pressure in the fit's
//! pressure unit.

use pf_chem::{PhaseSplit, raoult_vapor_fraction};
use pf_core::{ChemicalId, NodeId};
use pf_graph::{EquipmentNode, FlowsheetSnapshot};
use serde::Serialize;

use crate::config::{AnalysisConfig, VleConfig};
use crate::error::FailureReason;
use crate::outcome::{NodeOutcome, PassOutput};

/// Raoult's-law estimate for one composition entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentEquilibrium {
    pub chemical_id: ChemicalId,
    /// Liquid mole fraction as given.
    pub mole_fraction: f64,
    /// `y = x · P_sat / P`
    pub vapor_fraction: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VleRecord {
    pub id: NodeId,
    pub temperature: f64,
    pub pressure: f64,
    pub vapor_pressure: f64,
    pub equilibrium_constant: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase_split: Option<PhaseSplit>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<ComponentEquilibrium>,
}

pub fn evaluate(node: &EquipmentNode, config: &VleConfig) -> Result<VleRecord, FailureReason> {
    let temperature = node.temperature_c();
    let pressure = node.pressure();

    let vapor_pressure = config.antoine.vapor_pressure(temperature)?;
    if !(pressure > 0.0) {
        return Err(FailureReason::DomainError {
            what: "pressure",
            value: pressure,
        });
    }

    let equilibrium_constant = vapor_pressure / pressure;
    if !equilibrium_constant.is_finite() {
        return Err(FailureReason::NonFinite {
            what: "equilibrium constant",
        });
    }

    let components = node
        .composition()
        .components()
        .iter()
        .map(|c| -> Result<ComponentEquilibrium, FailureReason> {
            Ok(ComponentEquilibrium {
                chemical_id: c.chemical_id.clone(),
                mole_fraction: c.mole_fraction,
                vapor_fraction: raoult_vapor_fraction(c.mole_fraction, vapor_pressure, pressure)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(VleRecord {
        id: node.id().clone(),
        temperature,
        pressure,
        vapor_pressure,
        equilibrium_constant,
        phase_split: node.composition().phase_split(),
        components,
    })
}

/// Run VLE over the equilibrium-stage nodes.
pub fn run(snapshot: &FlowsheetSnapshot, config: &AnalysisConfig) -> PassOutput<VleRecord> {
    let outcomes = snapshot
        .nodes()
        .iter()
        .filter(|node| node.kind().supports_vle())
        .map(|node| NodeOutcome::from_result(node.id(), evaluate(node, &config.vle)))
        .collect();
    PassOutput::new(outcomes)
}
