use serde::{Deserialize, Serialize};

use crate::graph::node::{Node, NodeId};

/// Undirected connection between two locations in a map snapshot.
///
/// Edges carry no weight of their own; weights are derived at build time
/// from the endpoint geometry and the cost model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub start_node_id: NodeId,
    pub end_node_id: NodeId,
}

impl Edge {
    pub fn new(start: impl Into<NodeId>, end: impl Into<NodeId>) -> Self {
        Edge {
            start_node_id: start.into(),
            end_node_id: end.into(),
        }
    }
}

/// Fully materialised node/edge snapshot, handed over by the data layer.
///
/// How the snapshot is stored, loaded or cached is a collaborator
/// concern; the engine only ever sees it complete.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapSnapshot {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}
