use serde::{Deserialize, Serialize};

/// Search algorithm, selectable per request.
///
/// The set is closed: a request for one algorithm either runs that
/// algorithm or fails; there is never a fallback onto another.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::VariantArray,
)]
pub enum Algorithm {
    /// Best-first search ordered by cost so far plus an admissible
    /// estimate of the remainder. Expands the fewest nodes in practice,
    /// so it is the default for interactive use.
    #[default]
    #[serde(rename = "A*")]
    #[strum(serialize = "A*")]
    AStar,

    /// The same search skeleton with the estimate pinned to zero.
    /// Correctness baseline, and the fallback when no well-formed
    /// estimate exists.
    #[serde(rename = "Dijkstra")]
    #[strum(serialize = "Dijkstra")]
    Dijkstra,

    /// Hop-count-minimal search; edge weights are ignored entirely.
    #[serde(rename = "BFS")]
    #[strum(serialize = "BFS")]
    Bfs,

    /// First discovered path, depth first. Not optimal; kept for
    /// completeness and testing, not production routing.
    #[serde(rename = "DFS")]
    #[strum(serialize = "DFS")]
    Dfs,
}
