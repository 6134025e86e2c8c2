use log::{debug, info};
use rstar::RTree;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::graph::edge::MapSnapshot;
use crate::graph::error::GraphError;
use crate::graph::floor::{FloorId, FloorOrdering};
use crate::graph::item::{ConnectorAnchor, Graph, GraphStructure, NodeIx};
use crate::route::costing::CostModel;

/// Converts a flat node/edge snapshot into an adjacency-indexed
/// [`Graph`], validating referential integrity as it goes.
///
/// Building is the only mutating phase of a graph's life. A failed build
/// returns the first integrity error and installs nothing, so searches
/// only ever run against validated data.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    ordering: FloorOrdering,
    model: CostModel,
}

impl GraphBuilder {
    pub fn new(ordering: FloorOrdering, model: CostModel) -> Self {
        GraphBuilder { ordering, model }
    }

    pub fn build(&self, snapshot: &MapSnapshot) -> Result<Graph, GraphError> {
        info!(
            "ingesting snapshot of {} nodes and {} edges",
            snapshot.nodes.len(),
            snapshot.edges.len()
        );

        let mut nodes = Vec::with_capacity(snapshot.nodes.len());
        let mut ranks = Vec::with_capacity(snapshot.nodes.len());
        let mut ids =
            FxHashMap::with_capacity_and_hasher(snapshot.nodes.len(), Default::default());

        for node in &snapshot.nodes {
            let rank =
                self.ordering
                    .rank(&node.floor)
                    .ok_or_else(|| GraphError::UnknownFloor {
                        node: node.id.clone(),
                        floor: node.floor.clone(),
                    })?;

            let ix = nodes.len() as NodeIx;
            if ids.insert(node.id.clone(), ix).is_some() {
                return Err(GraphError::DuplicateNode(node.id.clone()));
            }

            nodes.push(node.clone());
            ranks.push(rank);
        }

        let mut graph = GraphStructure::with_capacity(nodes.len(), snapshot.edges.len());
        for ix in 0..nodes.len() {
            graph.add_node(ix as NodeIx);
        }

        // Nodes with a cross-floor edge; these anchor the heuristic's
        // per-floor exit indices.
        let mut exits: FxHashSet<NodeIx> = FxHashSet::default();
        let mut duplicates = 0usize;

        for edge in &snapshot.edges {
            let a = ids
                .get(&edge.start_node_id)
                .copied()
                .ok_or_else(|| GraphError::MissingEndpoint {
                    start: edge.start_node_id.clone(),
                    end: edge.end_node_id.clone(),
                    missing: edge.start_node_id.clone(),
                })?;

            let b = ids
                .get(&edge.end_node_id)
                .copied()
                .ok_or_else(|| GraphError::MissingEndpoint {
                    start: edge.start_node_id.clone(),
                    end: edge.end_node_id.clone(),
                    missing: edge.end_node_id.clone(),
                })?;

            let gap = ranks[a as usize].abs_diff(ranks[b as usize]);
            let weight = self
                .model
                .edge_weight(&nodes[a as usize], &nodes[b as usize], gap);

            // Dijkstra/A* require strictly positive weights. Zero also
            // catches self-loops and coincident same-floor nodes.
            if weight <= 0.0 {
                return Err(GraphError::NonPositiveWeight {
                    start: edge.start_node_id.clone(),
                    end: edge.end_node_id.clone(),
                    weight,
                });
            }

            if gap > 0 {
                exits.insert(a);
                exits.insert(b);
            }

            // One snapshot edge produces both adjacency directions.
            // Duplicates between the same pair collapse to the lightest
            // instance so they cannot bias shortest-path results.
            match graph.edge_weight(a, b) {
                Some(&existing) => {
                    duplicates += 1;
                    debug!(
                        "duplicate edge {} -- {} (weights {existing} and {weight})",
                        edge.start_node_id, edge.end_node_id
                    );

                    if weight < existing {
                        graph.add_edge(a, b, weight);
                    }
                }
                None => {
                    graph.add_edge(a, b, weight);
                }
            }
        }

        let mut per_floor: FxHashMap<FloorId, Vec<ConnectorAnchor>> = FxHashMap::default();
        for ix in 0..nodes.len() as NodeIx {
            if exits.contains(&ix) {
                let node = &nodes[ix as usize];
                per_floor
                    .entry(node.floor.clone())
                    .or_default()
                    .push(ConnectorAnchor {
                        ix,
                        position: [node.x, node.y],
                    });
            }
        }

        let connectors = per_floor
            .into_iter()
            .map(|(floor, anchors)| (floor, RTree::bulk_load(anchors)))
            .collect();

        info!(
            "finished. {} nodes, {} edges ({duplicates} duplicate edges collapsed)",
            nodes.len(),
            graph.edge_count()
        );

        Ok(Graph {
            graph,
            nodes,
            ids,
            connectors,
            ordering: self.ordering.clone(),
            model: self.model,
        })
    }
}
