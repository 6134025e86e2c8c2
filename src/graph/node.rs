//! Building locations as they arrive from the data layer. A node is a
//! point on a floor's reference image; edges between nodes are supplied
//! separately in the [`MapSnapshot`](crate::graph::MapSnapshot).

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::graph::floor::FloorId;

/// Stable identifier of a building location (e.g. `BINFO00202`),
/// unique across the entire map, including across floors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        NodeId(value.to_string())
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        NodeId(value)
    }
}

/// Category of a building location, as written in map data.
///
/// The engine treats every category as an ordinary vertex; the
/// distinctions matter to collaborators (which nodes to offer as
/// destinations) and to the cross-floor heuristic (which nodes can
/// join floors).
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::VariantArray,
)]
pub enum NodeType {
    /// Hallway junction. Shapes corridors, never offered as a destination.
    #[serde(rename = "HALL")]
    #[strum(serialize = "HALL")]
    Hall,
    #[serde(rename = "ELEV")]
    #[strum(serialize = "ELEV")]
    Elevator,
    #[serde(rename = "STAI")]
    #[strum(serialize = "STAI")]
    Stairs,
    #[serde(rename = "CONF")]
    #[strum(serialize = "CONF")]
    Conference,
    #[serde(rename = "DEPT")]
    #[strum(serialize = "DEPT")]
    Department,
    #[serde(rename = "INFO")]
    #[strum(serialize = "INFO")]
    Info,
    #[serde(rename = "LABS")]
    #[strum(serialize = "LABS")]
    Lab,
    #[serde(rename = "REST")]
    #[strum(serialize = "REST")]
    Restroom,
    #[serde(rename = "RETL")]
    #[strum(serialize = "RETL")]
    Retail,
    #[serde(rename = "SERV")]
    #[strum(serialize = "SERV")]
    Service,
    #[serde(rename = "EXIT")]
    #[strum(serialize = "EXIT")]
    Exit,
}

impl NodeType {
    /// Elevators and stairwells are the node kinds that may carry
    /// cross-floor edges.
    pub fn is_connector(&self) -> bool {
        matches!(self, NodeType::Elevator | NodeType::Stairs)
    }

    /// Whether collaborators should offer this location as a start/end
    /// candidate. Hallway junctions are routing infrastructure only.
    pub fn is_destination(&self) -> bool {
        !matches!(self, NodeType::Hall)
    }
}

/// A location in the building.
///
/// `x`/`y` are planar coordinates on the floor's reference image and are
/// only comparable between nodes sharing a floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: NodeId,
    /// Display label, passed through untouched.
    pub long_name: String,
    pub short_name: String,
    #[serde(rename = "type")]
    pub kind: NodeType,
    pub floor: FloorId,
    pub x: f64,
    pub y: f64,
}

impl Node {
    /// Planar distance to another node. Only meaningful when both nodes
    /// share a floor.
    pub(crate) fn distance(&self, other: &Node) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}
