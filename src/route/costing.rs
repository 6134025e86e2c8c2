//! Cost and heuristic policy shared by every search algorithm.
//!
//! Both functions are pure over the graph model; neither holds state.
//! Floor transitions are not a special search mode anywhere in the
//! engine, they are simply edges whose weight comes from here.

use serde::{Deserialize, Serialize};

use crate::graph::item::{Graph, NodeIx, Weight};
use crate::graph::node::Node;

/// Cost of crossing one floor boundary, in the same unit as planar
/// coordinates. Large against a typical same-floor hop so searches do
/// not hop floors spuriously, finite so transitions stay reachable.
pub const DEFAULT_FLOOR_TRANSITION_COST: f64 = 150.0;

/// Tunable cost policy baked into a graph at build time.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostModel {
    pub floor_transition_cost: f64,
}

impl Default for CostModel {
    fn default() -> Self {
        CostModel {
            floor_transition_cost: DEFAULT_FLOOR_TRANSITION_COST,
        }
    }
}

impl CostModel {
    pub fn new(floor_transition_cost: f64) -> Self {
        CostModel {
            floor_transition_cost,
        }
    }

    /// Weight of an edge joining `a` and `b`, where `gap` is the number
    /// of floor boundaries between their floors.
    ///
    /// Same-floor edges weigh their planar length. Cross-floor edges are
    /// charged per boundary, since planar coordinates are not comparable
    /// across floors; charging per boundary (rather than per edge) is
    /// what keeps [`CostModel::estimate`] admissible for edges that jump
    /// several floors at once.
    pub(crate) fn edge_weight(&self, a: &Node, b: &Node, gap: usize) -> Weight {
        if gap == 0 {
            a.distance(b)
        } else {
            self.floor_transition_cost * gap as f64
        }
    }

    /// Admissible estimate of the remaining cost from `from` to `goal`:
    /// never more than the true cost, or the optimality of best-first
    /// search breaks.
    ///
    /// On the goal floor this is the planar distance. Elsewhere it is the
    /// distance to the nearest node that can leave the floor, plus one
    /// boundary charge per floor boundary remaining. The walk after the
    /// final transition is estimated at zero.
    pub(crate) fn estimate(&self, graph: &Graph, from: NodeIx, goal: NodeIx) -> f64 {
        let (from, goal) = (graph.node(from), graph.node(goal));

        let gap = match graph.ordering().gap(&from.floor, &goal.floor) {
            Some(gap) => gap,
            // Unreachable for a built graph; zero stays admissible.
            None => return 0.0,
        };

        if gap == 0 {
            return from.distance(goal);
        }

        let approach = graph
            .nearest_connector(&from.floor, [from.x, from.y])
            .map(|(_, distance)| distance)
            // A floor with no exit cannot reach the goal floor at all;
            // the frontier dies here whatever the estimate says.
            .unwrap_or(0.0);

        approach + self.floor_transition_cost * gap as f64
    }
}
