//! Equipment parameters.
//!
//! Every node carries the same operating conditions plus a detail block whose
//! layout depends on the equipment category. The pairing of detail and kind
//! is checked when the node is constructed.

use pf_chem::Composition;
use serde::Serialize;

use crate::equipment::EquipmentCategory;

/// Operating conditions shared by all equipment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessConditions {
    /// °C
    pub temperature_c: f64,
    /// Same unit as the denominator of the equilibrium ratio.
    pub pressure: f64,
    pub flow_rate: f64,
    /// Specific heat capacity; the energy balance falls back to a configured default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heat_capacity: Option<f64>,
    #[serde(skip_serializing_if = "Composition::is_empty")]
    pub composition: Composition,
}

impl ProcessConditions {
    pub fn new(temperature_c: f64, pressure: f64, flow_rate: f64) -> Self {
        Self {
            temperature_c,
            pressure,
            flow_rate,
            heat_capacity: None,
            composition: Composition::default(),
        }
    }

    pub fn with_heat_capacity(mut self, heat_capacity: f64) -> Self {
        self.heat_capacity = Some(heat_capacity);
        self
    }

    pub fn with_composition(mut self, composition: Composition) -> Self {
        self.composition = composition;
        self
    }
}

/// Category-specific optional parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum EquipmentDetail {
    RawMaterial,
    Reactor {
        /// Multiplier on the Arrhenius rate in the conversion expression.
        #[serde(skip_serializing_if = "Option::is_none")]
        reaction_rate: Option<f64>,
    },
    HeatExchanger {
        #[serde(skip_serializing_if = "Option::is_none")]
        heat_duty: Option<f64>,
        /// °C; the heat transfer pass uses a configured default when absent.
        #[serde(skip_serializing_if = "Option::is_none")]
        reference_temperature_c: Option<f64>,
    },
    Separation {
        #[serde(skip_serializing_if = "Option::is_none")]
        efficiency: Option<f64>,
    },
    Basic {
        #[serde(skip_serializing_if = "Option::is_none")]
        efficiency: Option<f64>,
    },
    Analysis,
}

impl EquipmentDetail {
    /// Detail block with every optional parameter unset.
    pub fn empty_for(category: EquipmentCategory) -> Self {
        match category {
            EquipmentCategory::RawMaterial => EquipmentDetail::RawMaterial,
            EquipmentCategory::Reactor => EquipmentDetail::Reactor {
                reaction_rate: None,
            },
            EquipmentCategory::HeatExchanger => EquipmentDetail::HeatExchanger {
                heat_duty: None,
                reference_temperature_c: None,
            },
            EquipmentCategory::Separation => EquipmentDetail::Separation { efficiency: None },
            EquipmentCategory::Basic => EquipmentDetail::Basic { efficiency: None },
            EquipmentCategory::Analysis => EquipmentDetail::Analysis,
        }
    }

    pub fn category(&self) -> EquipmentCategory {
        match self {
            EquipmentDetail::RawMaterial => EquipmentCategory::RawMaterial,
            EquipmentDetail::Reactor { .. } => EquipmentCategory::Reactor,
            EquipmentDetail::HeatExchanger { .. } => EquipmentCategory::HeatExchanger,
            EquipmentDetail::Separation { .. } => EquipmentCategory::Separation,
            EquipmentDetail::Basic { .. } => EquipmentCategory::Basic,
            EquipmentDetail::Analysis => EquipmentCategory::Analysis,
        }
    }

    pub fn reaction_rate(&self) -> Option<f64> {
        match self {
            EquipmentDetail::Reactor { reaction_rate } => *reaction_rate,
            _ => None,
        }
    }

    pub fn heat_duty(&self) -> Option<f64> {
        match self {
            EquipmentDetail::HeatExchanger { heat_duty, .. } => *heat_duty,
            _ => None,
        }
    }

    pub fn reference_temperature_c(&self) -> Option<f64> {
        match self {
            EquipmentDetail::HeatExchanger {
                reference_temperature_c,
                ..
            } => *reference_temperature_c,
            _ => None,
        }
    }

    pub fn efficiency(&self) -> Option<f64> {
        match self {
            EquipmentDetail::Separation { efficiency } | EquipmentDetail::Basic { efficiency } => {
                *efficiency
            }
            _ => None,
        }
    }
}
