use thiserror::Error;

use crate::graph::node::NodeId;

/// Request validation failure: a caller error, reported immediately and
/// never retried internally.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouteError {
    /// The request names an id the graph does not contain.
    #[error("unknown node id {0}")]
    InvalidNode(NodeId),
}
