use thiserror::Error;

use crate::graph::floor::FloorId;
use crate::graph::node::NodeId;

/// Integrity failure while building a graph from a snapshot.
///
/// Any of these is fatal to construction: a broken graph is never
/// installed, so searches only ever run against validated data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("duplicate node id {0}")]
    DuplicateNode(NodeId),

    #[error("node {node} sits on floor {floor}, which the floor ordering does not list")]
    UnknownFloor { node: NodeId, floor: FloorId },

    #[error("edge {start} -- {end} references missing node {missing}")]
    MissingEndpoint {
        start: NodeId,
        end: NodeId,
        missing: NodeId,
    },

    #[error("edge {start} -- {end} derives non-positive weight {weight}")]
    NonPositiveWeight {
        start: NodeId,
        end: NodeId,
        weight: f64,
    },
}
