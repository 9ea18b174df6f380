//! Flowsheet file schema definitions.

use pf_analysis::AnalysisConfig;
use pf_graph::EquipmentKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlowsheetFile {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub nodes: Vec<NodeDef>,
    #[serde(default)]
    pub streams: Vec<StreamDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<AnalysisConfig>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct PositionDef {
    pub x: f64,
    pub y: f64,
}

/// One equipment node. Category-specific parameters are flat optional fields;
/// validation checks they belong to the node's kind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NodeDef {
    pub id: String,
    pub kind: EquipmentKind,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub position: PositionDef,
    pub temperature_c: f64,
    pub pressure: f64,
    pub flow_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heat_capacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub efficiency: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heat_duty: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_temperature_c: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reaction_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composition: Option<CompositionDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CompositionDef {
    #[serde(default)]
    pub components: Vec<ComponentDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vapor: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liquid: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComponentDef {
    pub chemical_id: String,
    pub mole_fraction: f64,
    #[serde(default)]
    pub mass_flow: f64,
    #[serde(default)]
    pub temperature_c: f64,
    #[serde(default)]
    pub pressure: f64,
}

/// A directed stream. Conditions are whatever was recorded when it was drawn.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StreamDef {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_flow: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature_c: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composition: Option<CompositionDef>,
}
