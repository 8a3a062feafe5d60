use super::node::{EdgeHandle, NodeId, NodeRole};
use ahash::AHashMap;

/// One incoming edge of a node, as seen from its target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Incoming {
    pub source: NodeId,
    pub handle: Option<EdgeHandle>,
}

/// Validated, immutable view of a dataflow graph.
///
/// Built once per compile request by [`GraphBuilder`](super::GraphBuilder). Every edge
/// endpoint is a declared node and there is exactly one result node.
#[derive(Debug, Clone)]
pub struct GraphModel {
    pub(super) roles: AHashMap<NodeId, NodeRole>,
    pub(super) incoming: AHashMap<NodeId, Vec<Incoming>>,
    pub(super) result_id: NodeId,
    pub(super) edge_count: usize,
}

impl GraphModel {
    pub fn role(&self, node_id: &str) -> Option<&NodeRole> {
        self.roles.get(node_id)
    }

    /// Incoming edges of a node in declaration order. Empty for unknown ids.
    pub fn incoming(&self, node_id: &str) -> &[Incoming] {
        self.incoming
            .get(node_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn result_id(&self) -> &str {
        &self.result_id
    }

    pub fn node_count(&self) -> usize {
        self.roles.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}
