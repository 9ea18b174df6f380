//! Immutable flowsheet snapshot handed to the analysis passes.

use std::collections::HashMap;

use pf_core::NodeId;
use serde::Serialize;

use crate::error::GraphResult;
use crate::node::EquipmentNode;
use crate::stream::Stream;
use crate::validate;

/// An ordered, validated set of nodes and streams.
///
/// Node and stream ids are unique. Stream endpoints are NOT required to
/// resolve; the passes treat dangling streams as contributing nothing and
/// report them (see [`Incidence`](crate::Incidence)).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowsheetSnapshot {
    pub(crate) nodes: Vec<EquipmentNode>,
    pub(crate) streams: Vec<Stream>,

    /// NodeId -> position in `nodes`.
    #[serde(skip)]
    pub(crate) node_index: HashMap<NodeId, usize>,
}

impl FlowsheetSnapshot {
    /// Validate and freeze a node/stream set.
    pub fn new(nodes: Vec<EquipmentNode>, streams: Vec<Stream>) -> GraphResult<Self> {
        validate::validate_unique_ids(&nodes, &streams)?;
        for stream in &streams {
            validate::validate_stream(stream)?;
        }

        let node_index = nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.id().clone(), i))
            .collect();

        Ok(Self {
            nodes,
            streams,
            node_index,
        })
    }

    pub fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            streams: Vec::new(),
            node_index: HashMap::new(),
        }
    }

    /// Return all nodes, in editor order.
    pub fn nodes(&self) -> &[EquipmentNode] {
        &self.nodes
    }

    /// Return all streams, in editor order.
    pub fn streams(&self) -> &[Stream] {
        &self.streams
    }

    /// Get a node by id.
    pub fn node(&self, id: &NodeId) -> Option<&EquipmentNode> {
        self.node_index(id).map(|i| &self.nodes[i])
    }

    /// Position of a node in [`nodes`](Self::nodes).
    pub fn node_index(&self, id: &NodeId) -> Option<usize> {
        self.node_index.get(id).copied()
    }

    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.node_index.contains_key(id)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
