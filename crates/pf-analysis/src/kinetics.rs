//! Reaction kinetics pass.
//!
//! Arrhenius rate `k = A · exp(-Ea / (R · T))` at the reactor temperature and
//! first-order conversion `X = 1 - exp(-k · p)`, where `p` is the reactor's
//! rate parameter.

use pf_core::NodeId;
use pf_core::constants::celsius_to_kelvin;
use pf_graph::{EquipmentNode, FlowsheetSnapshot};
use serde::Serialize;

use crate::config::{AnalysisConfig, KineticsConfig};
use crate::error::{FailureReason, check_finite};
use crate::outcome::{NodeOutcome, PassOutput};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KineticsRecord {
    pub id: NodeId,
    /// Arrhenius rate constant.
    pub reaction_rate: f64,
    pub conversion: f64,
    pub selectivity: f64,
}

/// Arrhenius rate constant at `t_c` (°C).
pub fn arrhenius_rate(config: &KineticsConfig, t_c: f64) -> Result<f64, FailureReason> {
    let t_abs = celsius_to_kelvin(t_c);
    if !(t_abs > 0.0) {
        return Err(FailureReason::DomainError {
            what: "absolute temperature",
            value: t_abs,
        });
    }

    let exponent = -config.activation_energy.value / (config.gas_constant.value * t_abs);
    check_finite(config.pre_exponential * exponent.exp(), "reaction rate")
}

/// Largest `f64` below one. Conversion saturates here instead of reaching 1.
pub const MAX_CONVERSION: f64 = 1.0 - f64::EPSILON / 2.0;

/// First-order conversion for a rate constant and a non-negative rate parameter.
///
/// Always in `[0, 1)`: large `k · p` saturates at [`MAX_CONVERSION`].
pub fn conversion(rate: f64, rate_parameter: f64) -> Result<f64, FailureReason> {
    if !(rate_parameter >= 0.0) {
        return Err(FailureReason::DomainError {
            what: "reaction rate parameter",
            value: rate_parameter,
        });
    }
    // 1 - exp(-x), accurate for small x.
    let x = check_finite(-(-rate * rate_parameter).exp_m1(), "conversion")?;
    Ok(x.min(MAX_CONVERSION))
}

pub fn evaluate(node: &EquipmentNode, config: &KineticsConfig) -> Result<KineticsRecord, FailureReason> {
    let rate_parameter = node
        .detail()
        .reaction_rate()
        .unwrap_or(config.default_rate_parameter);

    let reaction_rate = arrhenius_rate(config, node.temperature_c())?;
    let conversion = conversion(reaction_rate, rate_parameter)?;

    Ok(KineticsRecord {
        id: node.id().clone(),
        reaction_rate,
        conversion,
        selectivity: config.selectivity,
    })
}

/// Run kinetics over the reactor nodes.
pub fn run(snapshot: &FlowsheetSnapshot, config: &AnalysisConfig) -> PassOutput<KineticsRecord> {
    let outcomes = snapshot
        .nodes()
        .iter()
        .filter(|node| node.kind().is_reactor())
        .map(|node| NodeOutcome::from_result(node.id(), evaluate(node, &config.kinetics)))
        .collect();
    PassOutput::new(outcomes)
}
