//! Streams: directed connections between equipment nodes.

use pf_chem::Composition;
use pf_core::{NodeId, StreamId};
use serde::Serialize;

use crate::node::EquipmentNode;

/// A directed stream from `source` to `target`.
///
/// Conditions are a frozen copy taken when the stream was created. Later edits
/// to the source node do not propagate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stream {
    pub id: StreamId,
    pub source: NodeId,
    pub target: NodeId,
    #[serde(skip_serializing_if = "Composition::is_empty")]
    pub composition: Composition,
    /// °C
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_c: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pressure: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_flow: Option<f64>,
}

impl Stream {
    /// Bare connection with no conditions recorded.
    pub fn new(id: impl Into<StreamId>, source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            composition: Composition::default(),
            temperature_c: None,
            pressure: None,
            total_flow: None,
        }
    }

    /// Stream whose conditions are copied from `source`.
    pub fn snapshot_from(id: impl Into<StreamId>, source: &EquipmentNode, target: NodeId) -> Self {
        Self {
            id: id.into(),
            source: source.id().clone(),
            target,
            composition: source.composition().clone(),
            temperature_c: Some(source.temperature_c()),
            pressure: Some(source.pressure()),
            total_flow: Some(source.flow_rate()),
        }
    }

    pub fn with_total_flow(mut self, total_flow: f64) -> Self {
        self.total_flow = Some(total_flow);
        self
    }

    pub fn with_temperature(mut self, temperature_c: f64) -> Self {
        self.temperature_c = Some(temperature_c);
        self
    }

    pub fn with_pressure(mut self, pressure: f64) -> Self {
        self.pressure = Some(pressure);
        self
    }

    pub fn with_composition(mut self, composition: Composition) -> Self {
        self.composition = composition;
        self
    }

    /// Total flow, zero when not recorded.
    pub fn flow_or_zero(&self) -> f64 {
        self.total_flow.unwrap_or(0.0)
    }

    /// Temperature in °C, zero when not recorded.
    pub fn temperature_or_zero(&self) -> f64 {
        self.temperature_c.unwrap_or(0.0)
    }
}
