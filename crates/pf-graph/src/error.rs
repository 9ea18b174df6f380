//! Graph-specific error types.

use pf_core::{NodeId, PfError, StreamId};

use crate::equipment::{EquipmentCategory, EquipmentKind};

pub type GraphResult<T> = Result<T, GraphError>;

/// Graph construction and validation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    /// Two nodes share an id.
    DuplicateNodeId { id: NodeId },

    /// Two streams share an id.
    DuplicateStreamId { id: StreamId },

    /// A connection names a node that is not in the builder.
    UnknownNode { id: NodeId },

    /// The parameter block does not belong to the node's equipment category.
    ParamsMismatch {
        node: NodeId,
        kind: EquipmentKind,
        detail: EquipmentCategory,
    },

    /// A node parameter is non-finite or out of its allowed range.
    InvalidNodeParameter {
        node: NodeId,
        what: &'static str,
        value: f64,
    },

    /// A stream condition is non-finite.
    InvalidStreamParameter {
        stream: StreamId,
        what: &'static str,
        value: f64,
    },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::DuplicateNodeId { id } => write!(f, "Duplicate node id {}", id),
            GraphError::DuplicateStreamId { id } => write!(f, "Duplicate stream id {}", id),
            GraphError::UnknownNode { id } => write!(f, "Node {} does not exist", id),
            GraphError::ParamsMismatch { node, kind, detail } => {
                write!(
                    f,
                    "Node {} of kind {} was given {:?} parameters",
                    node, kind, detail
                )
            }
            GraphError::InvalidNodeParameter { node, what, value } => {
                write!(f, "Node {} has invalid {} = {}", node, what, value)
            }
            GraphError::InvalidStreamParameter {
                stream,
                what,
                value,
            } => {
                write!(f, "Stream {} has invalid {} = {}", stream, what, value)
            }
        }
    }
}

impl std::error::Error for GraphError {}

impl From<GraphError> for PfError {
    fn from(err: GraphError) -> Self {
        PfError::Invariant {
            what: err.to_string(),
        }
    }
}
