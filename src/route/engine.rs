//! The pathfinding engine: one operation, four interchangeable search
//! algorithms over the same immutable graph.
//!
//! Every search allocates its own frontier, settled set and predecessor
//! map, so concurrent requests share nothing but the graph itself.

use indexmap::map::Entry;
use indexmap::IndexMap;
use log::debug;
use rustc_hash::{FxHashSet, FxHasher};
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};
use std::hash::BuildHasherDefault;

use itertools::Itertools;

use crate::graph::item::{Graph, NodeIx, Weight};
use crate::graph::node::NodeId;
use crate::route::algorithm::Algorithm;
use crate::route::error::RouteError;
use crate::route::path::{Route, SearchLimits, SearchOutcome};

type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;
type Successors = SmallVec<[(NodeIx, Weight); 8]>;

/// Computes a route between two locations of `graph`.
///
/// `start == end` is valid and yields a zero-cost, single-node route
/// under every algorithm. Given the same graph, endpoints and algorithm,
/// repeated invocations return identical routes: frontier ties break by
/// insertion order, never by hash iteration order.
pub fn find_path(
    graph: &Graph,
    start: &NodeId,
    end: &NodeId,
    algorithm: Algorithm,
    limits: SearchLimits,
) -> Result<SearchOutcome, RouteError> {
    let start_ix = graph
        .resolve(start)
        .ok_or_else(|| RouteError::InvalidNode(start.clone()))?;
    let end_ix = graph
        .resolve(end)
        .ok_or_else(|| RouteError::InvalidNode(end.clone()))?;

    debug!("routing {start} -> {end} via {algorithm}");

    if start_ix == end_ix {
        return Ok(SearchOutcome::Found(Route::from_indices(
            graph,
            &[start_ix],
            0.0,
        )));
    }

    let outcome = match algorithm {
        Algorithm::AStar => {
            let model = *graph.cost_model();
            best_first(graph, start_ix, end_ix, limits, move |ix| {
                model.estimate(graph, ix, end_ix)
            })
        }
        Algorithm::Dijkstra => best_first(graph, start_ix, end_ix, limits, |_| 0.0),
        Algorithm::Bfs => breadth_first(graph, start_ix, end_ix, limits),
        Algorithm::Dfs => depth_first(graph, start_ix, end_ix, limits),
    };

    Ok(outcome)
}

/// Frontier entry, ordered so the binary max-heap pops the lowest
/// priority first, and among equal priorities the earliest-pushed entry.
#[derive(Debug)]
struct SmallestHolder {
    priority: f64,
    seq: usize,
    index: usize,
}

impl PartialEq for SmallestHolder {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl Eq for SmallestHolder {}

impl PartialOrd for SmallestHolder {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestHolder {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Expansion budget: one unit spent per settled node, whichever the
/// algorithm.
struct Budget {
    max: Option<usize>,
    used: usize,
}

impl Budget {
    fn new(limits: SearchLimits) -> Self {
        Budget {
            max: limits.max_expansions,
            used: 0,
        }
    }

    /// Spends one expansion; true once the budget is gone.
    fn exhausted(&mut self) -> bool {
        self.used += 1;
        self.max.is_some_and(|max| self.used > max)
    }
}

/// Shared best-first skeleton behind A* and Dijkstra: a priority search
/// ordered by `cost so far + estimate(node)`, where A* supplies the
/// cross-floor heuristic and Dijkstra a constant zero.
fn best_first<H>(
    graph: &Graph,
    start: NodeIx,
    goal: NodeIx,
    limits: SearchLimits,
    estimate: H,
) -> SearchOutcome
where
    H: Fn(NodeIx) -> f64,
{
    let mut to_see: BinaryHeap<SmallestHolder> = BinaryHeap::with_capacity(256);
    let mut seen: FxHashSet<usize> = FxHashSet::default();
    let mut parents: FxIndexMap<NodeIx, (usize, f64)> =
        FxIndexMap::with_capacity_and_hasher(64, BuildHasherDefault::default());
    let mut budget = Budget::new(limits);
    let mut seq = 0usize;

    parents.insert(start, (usize::MAX, 0.0));
    to_see.push(SmallestHolder {
        priority: estimate(start),
        seq,
        index: 0,
    });

    while let Some(SmallestHolder { index, .. }) = to_see.pop() {
        if !seen.insert(index) {
            continue;
        }

        let (node, cost) = {
            let Some((&node, &(_, cost))) = parents.get_index(index) else {
                break;
            };
            (node, cost)
        };

        if node == goal {
            return SearchOutcome::Found(reconstruct_weighted(graph, &parents, index, cost));
        }

        if budget.exhausted() {
            return SearchOutcome::TimedOut;
        }

        let successors: Successors = graph
            .graph
            .edges(node)
            .map(|(_, next, &weight)| (next, weight))
            .collect();

        for (successor, weight) in successors {
            let new_cost = cost + weight;

            // Replace a known cost only on strict improvement; the
            // first-found path wins equal-cost ties.
            let next_index = match parents.entry(successor) {
                Entry::Vacant(entry) => {
                    let next_index = entry.index();
                    entry.insert((index, new_cost));
                    next_index
                }
                Entry::Occupied(mut entry) => {
                    if new_cost < entry.get().1 {
                        entry.insert((index, new_cost));
                        entry.index()
                    } else {
                        continue;
                    }
                }
            };

            seq += 1;
            to_see.push(SmallestHolder {
                priority: new_cost + estimate(successor),
                seq,
                index: next_index,
            });
        }
    }

    SearchOutcome::NoPathFound
}

/// Unweighted shortest path by hop count. Edge weights play no part in
/// the search, though the returned route still reports its real cost.
fn breadth_first(graph: &Graph, start: NodeIx, goal: NodeIx, limits: SearchLimits) -> SearchOutcome {
    let mut frontier: VecDeque<usize> = VecDeque::with_capacity(64);
    let mut parents: FxIndexMap<NodeIx, usize> =
        FxIndexMap::with_capacity_and_hasher(64, BuildHasherDefault::default());
    let mut budget = Budget::new(limits);

    parents.insert(start, usize::MAX);
    frontier.push_back(0);

    while let Some(index) = frontier.pop_front() {
        let Some((&node, _)) = parents.get_index(index) else {
            break;
        };

        if node == goal {
            return SearchOutcome::Found(reconstruct_unweighted(graph, &parents, index));
        }

        if budget.exhausted() {
            return SearchOutcome::TimedOut;
        }

        let successors: Successors = graph
            .graph
            .edges(node)
            .map(|(_, next, &weight)| (next, weight))
            .collect();

        for (successor, _) in successors {
            if let Entry::Vacant(entry) = parents.entry(successor) {
                let next_index = entry.index();
                entry.insert(index);
                frontier.push_back(next_index);
            }
        }
    }

    SearchOutcome::NoPathFound
}

/// First discovered path, exploring neighbors in adjacency order.
/// Returns what a recursive descent would, without the recursion; not
/// guaranteed optimal in weight or hops.
fn depth_first(graph: &Graph, start: NodeIx, goal: NodeIx, limits: SearchLimits) -> SearchOutcome {
    let mut stack: Vec<(NodeIx, usize)> = vec![(start, usize::MAX)];
    let mut parents: FxIndexMap<NodeIx, usize> =
        FxIndexMap::with_capacity_and_hasher(64, BuildHasherDefault::default());
    let mut budget = Budget::new(limits);

    while let Some((node, parent)) = stack.pop() {
        let index = match parents.entry(node) {
            Entry::Vacant(entry) => {
                let index = entry.index();
                entry.insert(parent);
                index
            }
            // Settled on an earlier branch.
            Entry::Occupied(_) => continue,
        };

        if node == goal {
            return SearchOutcome::Found(reconstruct_unweighted(graph, &parents, index));
        }

        if budget.exhausted() {
            return SearchOutcome::TimedOut;
        }

        let successors: Successors = graph
            .graph
            .edges(node)
            .map(|(_, next, &weight)| (next, weight))
            .collect();

        // Reversed so the first-listed neighbor lands on top of the
        // stack and is explored first.
        for &(successor, _) in successors.iter().rev() {
            if !parents.contains_key(&successor) {
                stack.push((successor, index));
            }
        }
    }

    SearchOutcome::NoPathFound
}

/// Walks a predecessor chain back to the start, in route order.
fn trail<V>(
    parents: &FxIndexMap<NodeIx, V>,
    index: usize,
    parent_of: impl Fn(&V) -> usize,
) -> Vec<NodeIx> {
    let mut indices = Vec::new();
    let mut current = Some(index);

    while let Some(i) = current {
        let Some((&node, value)) = parents.get_index(i) else {
            break;
        };

        indices.push(node);
        let parent = parent_of(value);
        current = (parent != usize::MAX).then_some(parent);
    }

    indices.reverse();
    indices
}

fn reconstruct_weighted(
    graph: &Graph,
    parents: &FxIndexMap<NodeIx, (usize, f64)>,
    index: usize,
    cost: f64,
) -> Route {
    let indices = trail(parents, index, |&(parent, _)| parent);
    Route::from_indices(graph, &indices, cost)
}

fn reconstruct_unweighted(
    graph: &Graph,
    parents: &FxIndexMap<NodeIx, usize>,
    index: usize,
) -> Route {
    let indices = trail(parents, index, |&parent| parent);

    let cost = indices
        .iter()
        .copied()
        .tuple_windows()
        .map(|(a, b)| graph.graph.edge_weight(a, b).copied().unwrap_or_default())
        .sum();

    Route::from_indices(graph, &indices, cost)
}
