//! Facade consumed by external collaborators (staff UI, other
//! services): one logical operation, independent of transport.
//!
//! The facade validates the request, hands the current graph snapshot to
//! the engine, and shapes the outcome into full node records. Resolving
//! human-readable names to node ids stays a collaborator concern.

#[doc(hidden)]
pub mod error;

#[doc(inline)]
pub use error::ServiceError;

use log::debug;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::{Arc, RwLock};

use crate::graph::floor::FloorId;
use crate::graph::item::Graph;
use crate::graph::node::{Node, NodeId};
use crate::route::algorithm::Algorithm;
use crate::route::engine::find_path;
use crate::route::path::{Route, SearchLimits, SearchOutcome};

/// A path request as collaborators send it over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathRequest {
    pub start_node_id: String,
    pub end_node_id: String,
    /// One of `A*`, `Dijkstra`, `BFS`, `DFS`.
    pub algorithm: String,
}

/// Result of a path request, shaped for collaborators: full node records
/// from start to end inclusive, or an explicit non-route outcome that is
/// distinguishable from a trivial one-node route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum PathResponse {
    Found {
        nodes: Vec<Node>,
        cost: f64,
        floors: Vec<FloorId>,
    },
    NoPathFound,
    TimedOut,
}

/// Path service over the currently installed graph snapshot.
///
/// The graph swaps atomically on [`PathService::install`]; requests that
/// are already searching keep the snapshot they started with, so a map
/// edit never tears a search in half.
#[derive(Debug)]
pub struct PathService {
    graph: RwLock<Arc<Graph>>,
    limits: SearchLimits,
}

impl PathService {
    pub fn new(graph: Graph) -> Self {
        PathService::with_limits(graph, SearchLimits::default())
    }

    pub fn with_limits(graph: Graph, limits: SearchLimits) -> Self {
        PathService {
            graph: RwLock::new(Arc::new(graph)),
            limits,
        }
    }

    /// Installs a freshly built graph for all subsequent requests.
    pub fn install(&self, graph: Graph) {
        *self.graph.write().unwrap() = Arc::new(graph);
    }

    /// The snapshot new requests will run against.
    pub fn snapshot(&self) -> Arc<Graph> {
        self.graph.read().unwrap().clone()
    }

    /// Validates the request and delegates to the engine.
    ///
    /// Unknown algorithm names fail with
    /// [`ServiceError::UnsupportedAlgorithm`]; there is no fallback onto
    /// another algorithm. Unknown node ids propagate unchanged as
    /// [`RouteError::InvalidNode`](crate::route::RouteError).
    pub fn find_path(&self, request: &PathRequest) -> Result<PathResponse, ServiceError> {
        let algorithm = Algorithm::from_str(&request.algorithm)
            .map_err(|_| ServiceError::UnsupportedAlgorithm(request.algorithm.clone()))?;

        debug!(
            "path request {} -> {} via {algorithm}",
            request.start_node_id, request.end_node_id
        );

        let start = NodeId::from(request.start_node_id.as_str());
        let end = NodeId::from(request.end_node_id.as_str());

        let graph = self.snapshot();
        let outcome = find_path(&graph, &start, &end, algorithm, self.limits)?;

        Ok(match outcome {
            SearchOutcome::Found(route) => respond(&graph, route),
            SearchOutcome::NoPathFound => PathResponse::NoPathFound,
            SearchOutcome::TimedOut => PathResponse::TimedOut,
        })
    }
}

fn respond(graph: &Graph, route: Route) -> PathResponse {
    let nodes = route
        .nodes
        .iter()
        .filter_map(|id| graph.get(id))
        .cloned()
        .collect();

    PathResponse::Found {
        nodes,
        cost: route.cost,
        floors: route.floors,
    }
}
