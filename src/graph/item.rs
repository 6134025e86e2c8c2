use petgraph::prelude::UnGraphMap;
use rstar::{RTree, AABB};
use rustc_hash::FxHashMap;
use std::fmt::{Debug, Formatter};

use crate::graph::builder::GraphBuilder;
use crate::graph::edge::MapSnapshot;
use crate::graph::error::GraphError;
use crate::graph::floor::{FloorId, FloorOrdering};
use crate::graph::node::{Node, NodeId};
use crate::route::costing::CostModel;

/// Arena index of a node; the graph's internal vertex key.
pub type NodeIx = u32;
/// Derived edge cost.
pub type Weight = f64;

pub type GraphStructure = UnGraphMap<NodeIx, Weight>;

/// Spatial entry in a floor's exit index: a node from which the floor
/// can be left. Consulted by the cross-floor heuristic.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct ConnectorAnchor {
    pub(crate) ix: NodeIx,
    pub(crate) position: [f64; 2],
}

impl rstar::RTreeObject for ConnectorAnchor {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.position)
    }
}

impl rstar::PointDistance for ConnectorAnchor {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.position[0] - point[0];
        let dy = self.position[1] - point[1];
        dx * dx + dy * dy
    }
}

/// Routing graph over a building map snapshot.
///
/// Built once per snapshot by the [`GraphBuilder`], immutable afterwards,
/// and safe to share across concurrent path requests without locking.
/// Neighbor iteration follows edge insertion order, which keeps every
/// search over the same snapshot deterministic.
pub struct Graph {
    pub(crate) graph: GraphStructure,
    pub(crate) nodes: Vec<Node>,
    pub(crate) ids: FxHashMap<NodeId, NodeIx>,
    pub(crate) connectors: FxHashMap<FloorId, RTree<ConnectorAnchor>>,
    pub(crate) ordering: FloorOrdering,
    pub(crate) model: CostModel,
}

impl Debug for Graph {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Graph with Nodes: {}", self.nodes.len())
    }
}

impl Graph {
    /// Builds a graph from a snapshot with default floor ordering and
    /// cost model. Use a [`GraphBuilder`] to override either.
    pub fn from_snapshot(snapshot: &MapSnapshot) -> Result<Graph, GraphError> {
        GraphBuilder::default().build(snapshot)
    }

    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Full record of a location, if the id names one.
    pub fn get(&self, id: &NodeId) -> Option<&Node> {
        self.resolve(id).map(|ix| self.node(ix))
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn ordering(&self) -> &FloorOrdering {
        &self.ordering
    }

    pub fn cost_model(&self) -> &CostModel {
        &self.model
    }

    #[inline]
    pub(crate) fn resolve(&self, id: &NodeId) -> Option<NodeIx> {
        self.ids.get(id).copied()
    }

    #[inline]
    pub(crate) fn node(&self, ix: NodeIx) -> &Node {
        &self.nodes[ix as usize]
    }

    /// Nearest node on `floor` that carries a cross-floor edge, with its
    /// planar distance from `position`. `None` when the floor cannot be
    /// left at all.
    pub fn nearest_connector(&self, floor: &FloorId, position: [f64; 2]) -> Option<(&Node, f64)> {
        let index = self.connectors.get(floor)?;
        let anchor = index.nearest_neighbor(&position)?;
        let distance = rstar::PointDistance::distance_2(anchor, &position).sqrt();

        Some((self.node(anchor.ix), distance))
    }
}
