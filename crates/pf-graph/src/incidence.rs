//! Stream incidence index.
//!
//! Maps every node to the streams entering and leaving it, in stream order,
//! and lists the stream endpoints that do not resolve to a node.

use pf_core::{NodeId, StreamId};
use serde::Serialize;

use crate::snapshot::FlowsheetSnapshot;

/// Which end of a stream failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamEnd {
    Source,
    Target,
}

/// A stream endpoint naming a node absent from the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnresolvedRef {
    pub stream: StreamId,
    pub node: NodeId,
    pub end: StreamEnd,
}

/// Compact per-node stream adjacency.
///
/// A stream with any unresolved endpoint is left out of both lists so it
/// contributes nothing to either end.
#[derive(Debug, Clone)]
pub struct Incidence {
    /// node i's inbound streams are in inbound[inbound_offsets[i]..inbound_offsets[i+1]].
    inbound_offsets: Vec<usize>,
    inbound: Vec<usize>,
    outbound_offsets: Vec<usize>,
    outbound: Vec<usize>,
    unresolved: Vec<UnresolvedRef>,
}

impl Incidence {
    /// Build the index from a snapshot.
    pub fn build(snapshot: &FlowsheetSnapshot) -> Self {
        let node_count = snapshot.nodes().len();
        let mut inbound_lists: Vec<Vec<usize>> = vec![Vec::new(); node_count];
        let mut outbound_lists: Vec<Vec<usize>> = vec![Vec::new(); node_count];
        let mut unresolved = Vec::new();

        for (s_idx, stream) in snapshot.streams().iter().enumerate() {
            let source = snapshot.node_index(&stream.source);
            let target = snapshot.node_index(&stream.target);

            if source.is_none() {
                unresolved.push(UnresolvedRef {
                    stream: stream.id.clone(),
                    node: stream.source.clone(),
                    end: StreamEnd::Source,
                });
            }
            if target.is_none() {
                unresolved.push(UnresolvedRef {
                    stream: stream.id.clone(),
                    node: stream.target.clone(),
                    end: StreamEnd::Target,
                });
            }

            if let (Some(src), Some(tgt)) = (source, target) {
                outbound_lists[src].push(s_idx);
                inbound_lists[tgt].push(s_idx);
            }
        }

        let (inbound_offsets, inbound) = Self::flatten(inbound_lists);
        let (outbound_offsets, outbound) = Self::flatten(outbound_lists);

        Self {
            inbound_offsets,
            inbound,
            outbound_offsets,
            outbound,
            unresolved,
        }
    }

    fn flatten(lists: Vec<Vec<usize>>) -> (Vec<usize>, Vec<usize>) {
        let mut offsets = Vec::with_capacity(lists.len() + 1);
        let mut flat = Vec::new();
        offsets.push(0);
        for list in lists {
            flat.extend(list);
            offsets.push(flat.len());
        }
        (offsets, flat)
    }

    /// Indices (into `snapshot.streams()`) of streams whose target is node `node_idx`.
    pub fn inbound(&self, node_idx: usize) -> &[usize] {
        if node_idx + 1 >= self.inbound_offsets.len() {
            return &[];
        }
        &self.inbound[self.inbound_offsets[node_idx]..self.inbound_offsets[node_idx + 1]]
    }

    /// Indices of streams whose source is node `node_idx`.
    pub fn outbound(&self, node_idx: usize) -> &[usize] {
        if node_idx + 1 >= self.outbound_offsets.len() {
            return &[];
        }
        &self.outbound[self.outbound_offsets[node_idx]..self.outbound_offsets[node_idx + 1]]
    }

    /// Stream endpoints that name a node not in the snapshot.
    pub fn unresolved(&self) -> &[UnresolvedRef] {
        &self.unresolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equipment::EquipmentKind;
    use crate::node::EquipmentNode;
    use crate::params::ProcessConditions;
    use crate::stream::Stream;

    fn mixer(id: &str) -> EquipmentNode {
        EquipmentNode::with_defaults(
            id,
            EquipmentKind::Mixer,
            id,
            ProcessConditions::new(25.0, 1.0, 1.0),
        )
        .unwrap()
    }

    #[test]
    fn chain_adjacency() {
        // a -> b -> c
        let snap = FlowsheetSnapshot::new(
            vec![mixer("a"), mixer("b"), mixer("c")],
            vec![Stream::new("s1", "a", "b"), Stream::new("s2", "b", "c")],
        )
        .unwrap();
        let inc = Incidence::build(&snap);

        assert_eq!(inc.inbound(0), &[] as &[usize]);
        assert_eq!(inc.outbound(0), &[0]);
        assert_eq!(inc.inbound(1), &[0]);
        assert_eq!(inc.outbound(1), &[1]);
        assert_eq!(inc.inbound(2), &[1]);
        assert_eq!(inc.outbound(2), &[] as &[usize]);
        assert!(inc.unresolved().is_empty());
    }

    #[test]
    fn dangling_stream_is_excluded_at_both_ends() {
        let snap = FlowsheetSnapshot::new(
            vec![mixer("a")],
            vec![Stream::new("s1", "a", "ghost")],
        )
        .unwrap();
        let inc = Incidence::build(&snap);

        assert!(inc.outbound(0).is_empty());
        assert_eq!(
            inc.unresolved(),
            &[UnresolvedRef {
                stream: "s1".into(),
                node: "ghost".into(),
                end: StreamEnd::Target,
            }]
        );
    }

    #[test]
    fn both_ends_missing_reports_twice() {
        let snap = FlowsheetSnapshot::new(vec![], vec![Stream::new("s1", "x", "y")]).unwrap();
        let inc = Incidence::build(&snap);
        assert_eq!(inc.unresolved().len(), 2);
        assert_eq!(inc.unresolved()[0].end, StreamEnd::Source);
        assert_eq!(inc.unresolved()[1].end, StreamEnd::Target);
    }

    #[test]
    fn self_loop_counts_both_ways() {
        let snap =
            FlowsheetSnapshot::new(vec![mixer("a")], vec![Stream::new("r", "a", "a")]).unwrap();
        let inc = Incidence::build(&snap);
        assert_eq!(inc.inbound(0), &[0]);
        assert_eq!(inc.outbound(0), &[0]);
    }

    #[test]
    fn out_of_range_node_has_no_streams() {
        let inc = Incidence::build(&FlowsheetSnapshot::empty());
        assert!(inc.inbound(5).is_empty());
        assert!(inc.outbound(0).is_empty());
    }
}
