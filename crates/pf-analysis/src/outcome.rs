//! Per-node pass outcomes and run warnings.

use pf_core::{NodeId, StreamId};
use pf_graph::{StreamEnd, UnresolvedRef};
use serde::Serialize;

use crate::error::{FailureReason, NodeFailure};

/// Result of one pass for one node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum NodeOutcome<T> {
    Computed(T),
    Failed(NodeFailure),
}

impl<T> NodeOutcome<T> {
    /// Wrap a per-node evaluation result.
    pub fn from_result(id: &NodeId, result: Result<T, FailureReason>) -> Self {
        match result {
            Ok(record) => NodeOutcome::Computed(record),
            Err(reason) => NodeOutcome::Failed(NodeFailure {
                id: id.clone(),
                reason,
            }),
        }
    }

    pub fn computed(&self) -> Option<&T> {
        match self {
            NodeOutcome::Computed(record) => Some(record),
            NodeOutcome::Failed(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&NodeFailure> {
        match self {
            NodeOutcome::Computed(_) => None,
            NodeOutcome::Failed(failure) => Some(failure),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, NodeOutcome::Failed(_))
    }
}

/// Non-fatal condition noticed while analyzing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnalysisWarning {
    /// A stream names a node absent from the snapshot; it contributed nothing.
    #[serde(rename_all = "camelCase")]
    MissingReference {
        stream: StreamId,
        node: NodeId,
        end: StreamEnd,
    },
}

impl From<&UnresolvedRef> for AnalysisWarning {
    fn from(r: &UnresolvedRef) -> Self {
        AnalysisWarning::MissingReference {
            stream: r.stream.clone(),
            node: r.node.clone(),
            end: r.end,
        }
    }
}

impl std::fmt::Display for AnalysisWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisWarning::MissingReference { stream, node, end } => {
                let end = match end {
                    StreamEnd::Source => "source",
                    StreamEnd::Target => "target",
                };
                write!(f, "Stream {} has unknown {} node {}", stream, end, node)
            }
        }
    }
}

/// Everything one pass produced, in node order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PassOutput<T> {
    pub outcomes: Vec<NodeOutcome<T>>,
    /// Reported once per run on [`AnalysisReport`](crate::AnalysisReport).
    #[serde(skip)]
    pub warnings: Vec<AnalysisWarning>,
}

impl<T> PassOutput<T> {
    pub fn new(outcomes: Vec<NodeOutcome<T>>) -> Self {
        Self {
            outcomes,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(mut self, warnings: Vec<AnalysisWarning>) -> Self {
        self.warnings = warnings;
        self
    }

    /// Successfully computed records.
    pub fn computed(&self) -> impl Iterator<Item = &T> {
        self.outcomes.iter().filter_map(NodeOutcome::computed)
    }

    /// Failed node entries.
    pub fn failures(&self) -> impl Iterator<Item = &NodeFailure> {
        self.outcomes.iter().filter_map(NodeOutcome::failure)
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}
