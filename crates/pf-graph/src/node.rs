//! Equipment nodes.

use pf_chem::Composition;
use pf_core::NodeId;
use serde::Serialize;

use crate::equipment::EquipmentKind;
use crate::error::GraphResult;
use crate::params::{EquipmentDetail, ProcessConditions};
use crate::validate;

/// Canvas placement. Presentation only; no pass reads it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A piece of equipment on the flowsheet.
///
/// Fields are read-only after construction so that the kind/detail pairing
/// and the numeric checks done in [`EquipmentNode::new`] keep holding.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentNode {
    id: NodeId,
    kind: EquipmentKind,
    position: Position,
    name: String,
    conditions: ProcessConditions,
    detail: EquipmentDetail,
}

impl EquipmentNode {
    /// Create a node, validating the parameters against the kind.
    pub fn new(
        id: impl Into<NodeId>,
        kind: EquipmentKind,
        name: impl Into<String>,
        conditions: ProcessConditions,
        detail: EquipmentDetail,
    ) -> GraphResult<Self> {
        let id = id.into();
        validate::validate_node_params(&id, kind, &conditions, &detail)?;
        Ok(Self {
            id,
            kind,
            position: Position::default(),
            name: name.into(),
            conditions,
            detail,
        })
    }

    /// Create a node with every category-specific parameter unset.
    pub fn with_defaults(
        id: impl Into<NodeId>,
        kind: EquipmentKind,
        name: impl Into<String>,
        conditions: ProcessConditions,
    ) -> GraphResult<Self> {
        let detail = EquipmentDetail::empty_for(kind.category());
        Self::new(id, kind, name, conditions, detail)
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Position { x, y };
        self
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn kind(&self) -> EquipmentKind {
        self.kind
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn conditions(&self) -> &ProcessConditions {
        &self.conditions
    }

    pub fn detail(&self) -> &EquipmentDetail {
        &self.detail
    }

    pub fn temperature_c(&self) -> f64 {
        self.conditions.temperature_c
    }

    pub fn pressure(&self) -> f64 {
        self.conditions.pressure
    }

    pub fn flow_rate(&self) -> f64 {
        self.conditions.flow_rate
    }

    pub fn heat_capacity(&self) -> Option<f64> {
        self.conditions.heat_capacity
    }

    pub fn composition(&self) -> &Composition {
        &self.conditions.composition
    }

    /// Replace the operating conditions, re-running validation.
    pub(crate) fn set_conditions(&mut self, conditions: ProcessConditions) -> GraphResult<()> {
        validate::validate_node_params(&self.id, self.kind, &conditions, &self.detail)?;
        self.conditions = conditions;
        Ok(())
    }
}
