use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::graph::floor::FloorId;
use crate::graph::item::{Graph, NodeIx};
use crate::graph::node::NodeId;

/// Ordered walk from start to end inclusive, with its total cost and the
/// floors it passes through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub nodes: Vec<NodeId>,
    pub cost: f64,
    /// Floor sequence of the walk, consecutive repeats collapsed.
    pub floors: Vec<FloorId>,
}

impl Route {
    pub(crate) fn from_indices(graph: &Graph, indices: &[NodeIx], cost: f64) -> Route {
        let nodes = indices
            .iter()
            .map(|&ix| graph.node(ix).id.clone())
            .collect();

        let floors = indices
            .iter()
            .map(|&ix| graph.node(ix).floor.clone())
            .dedup()
            .collect();

        Route {
            nodes,
            cost,
            floors,
        }
    }

    /// Number of edges traversed.
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

/// Terminal state of a search.
///
/// `NoPathFound` is a normal outcome (disconnected floors with no
/// elevator, say), distinct from the request errors in
/// [`RouteError`](crate::route::RouteError) which are never produced by
/// a well-formed request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SearchOutcome {
    Found(Route),
    NoPathFound,
    /// The expansion budget ran out before the search settled the goal.
    /// Callers may retry with a cheaper algorithm.
    TimedOut,
}

impl SearchOutcome {
    /// The route, if one was found.
    pub fn route(self) -> Option<Route> {
        match self {
            SearchOutcome::Found(route) => Some(route),
            _ => None,
        }
    }
}

/// Per-search resource limits.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchLimits {
    /// Node expansions allowed before the search aborts with
    /// [`SearchOutcome::TimedOut`]. `None` runs unbounded; pathfinding
    /// is CPU-bound and synchronous, so hosts enforcing request
    /// deadlines should set this.
    pub max_expansions: Option<usize>,
}

impl SearchLimits {
    pub fn bounded(max_expansions: usize) -> Self {
        SearchLimits {
            max_expansions: Some(max_expansions),
        }
    }
}
