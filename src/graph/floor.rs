use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Floor label as written in map data (`L2`, `L1`, `1`, `2`, ...).
///
/// Labels carry no usable order of their own: `L2` sits *below* `L1`,
/// which sits below `1`. Vertical distance is always measured through a
/// [`FloorOrdering`], never by comparing labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FloorId(pub String);

impl Display for FloorId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FloorId {
    fn from(value: &str) -> Self {
        FloorId(value.to_string())
    }
}

impl From<String> for FloorId {
    fn from(value: String) -> Self {
        FloorId(value)
    }
}

/// Explicit bottom-to-top ordering table over floor labels.
///
/// Every floor appearing in a snapshot must be present here; the builder
/// rejects unknown labels rather than guessing at their position.
#[derive(Debug, Clone)]
pub struct FloorOrdering {
    ranks: FxHashMap<FloorId, usize>,
}

impl Default for FloorOrdering {
    fn default() -> Self {
        FloorOrdering::new(["L2", "L1", "1", "2", "3"])
    }
}

impl FloorOrdering {
    /// Builds an ordering from labels listed bottom to top.
    pub fn new<I, S>(levels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ranks = levels
            .into_iter()
            .enumerate()
            .map(|(rank, label)| (FloorId(label.into()), rank))
            .collect();

        FloorOrdering { ranks }
    }

    pub fn contains(&self, floor: &FloorId) -> bool {
        self.ranks.contains_key(floor)
    }

    /// Position of a floor in the vertical order, bottom floor first.
    pub fn rank(&self, floor: &FloorId) -> Option<usize> {
        self.ranks.get(floor).copied()
    }

    /// Number of floor boundaries between two floors; `0` when they are
    /// the same floor, `None` when either label is unknown.
    pub fn gap(&self, a: &FloorId, b: &FloorId) -> Option<usize> {
        let (a, b) = (self.rank(a)?, self.rank(b)?);
        Some(a.abs_diff(b))
    }
}
