//! Incremental flowsheet builder.

use pf_chem::{Chemical, Composition};
use pf_core::{NodeId, StreamId};
use uuid::Uuid;

use crate::equipment::EquipmentKind;
use crate::error::{GraphError, GraphResult};
use crate::node::{EquipmentNode, Position};
use crate::params::ProcessConditions;
use crate::snapshot::FlowsheetSnapshot;
use crate::stream::Stream;

/// Builder for constructing a flowsheet incrementally.
///
/// Use `add_node` and `connect` to build up the flowsheet,
/// then call `build()` to validate and freeze it into a `FlowsheetSnapshot`.
#[derive(Debug, Default)]
pub struct FlowsheetBuilder {
    nodes: Vec<EquipmentNode>,
    streams: Vec<Stream>,
}

impl FlowsheetBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node and return its id.
    pub fn add_node(&mut self, node: EquipmentNode) -> NodeId {
        let id = node.id().clone();
        self.nodes.push(node);
        id
    }

    /// Add a feed tank holding one pure chemical.
    ///
    /// Conditions start at zero; the editor fills them in later.
    pub fn add_chemical_node(&mut self, chemical: &Chemical, position: Position) -> GraphResult<NodeId> {
        let id = NodeId::new(format!("chemical_{}_{}", chemical.id, Uuid::new_v4().simple()));
        let composition = Composition::pure(chemical.id.clone());
        let node = EquipmentNode::with_defaults(
            id,
            EquipmentKind::FeedTank,
            chemical.name.clone(),
            ProcessConditions::new(0.0, 0.0, 0.0).with_composition(composition),
        )?
        .at(position.x, position.y);
        Ok(self.add_node(node))
    }

    /// Connect two existing nodes with a new stream, generating its id.
    ///
    /// The stream copies the source node's current conditions.
    pub fn connect(&mut self, source: &NodeId, target: &NodeId) -> GraphResult<StreamId> {
        let id = StreamId::new(format!("stream-{}", Uuid::new_v4()));
        self.connect_with_id(id, source, target)
    }

    /// Connect two existing nodes with a stream of the given id.
    pub fn connect_with_id(
        &mut self,
        id: impl Into<StreamId>,
        source: &NodeId,
        target: &NodeId,
    ) -> GraphResult<StreamId> {
        if !self.nodes.iter().any(|n| n.id() == target) {
            return Err(GraphError::UnknownNode { id: target.clone() });
        }
        let source_node = self
            .nodes
            .iter()
            .find(|n| n.id() == source)
            .ok_or_else(|| GraphError::UnknownNode { id: source.clone() })?;

        let stream = Stream::snapshot_from(id, source_node, target.clone());
        let id = stream.id.clone();
        self.streams.push(stream);
        Ok(id)
    }

    /// Add a stream as given, without checking its endpoints.
    pub fn add_stream(&mut self, stream: Stream) -> StreamId {
        let id = stream.id.clone();
        self.streams.push(stream);
        id
    }

    /// Replace a node's operating conditions.
    ///
    /// Streams created earlier keep the conditions they copied.
    pub fn update_conditions(&mut self, id: &NodeId, conditions: ProcessConditions) -> GraphResult<()> {
        let node = self
            .nodes
            .iter_mut()
            .find(|n| n.id() == id)
            .ok_or_else(|| GraphError::UnknownNode { id: id.clone() })?;
        node.set_conditions(conditions)
    }

    /// Build and validate the snapshot.
    pub fn build(self) -> GraphResult<FlowsheetSnapshot> {
        FlowsheetSnapshot::new(self.nodes, self.streams)
    }
}
