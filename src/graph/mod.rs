#[doc(hidden)]
pub mod builder;
#[doc(hidden)]
pub mod edge;
#[doc(hidden)]
pub mod error;
#[doc(hidden)]
pub mod floor;
#[doc(hidden)]
pub mod item;
#[doc(hidden)]
pub mod node;
#[doc(hidden)]
#[cfg(test)]
mod test;

#[doc(inline)]
pub use builder::GraphBuilder;
#[doc(inline)]
pub use edge::{Edge, MapSnapshot};
#[doc(inline)]
pub use error::GraphError;
#[doc(inline)]
pub use floor::{FloorId, FloorOrdering};
#[doc(inline)]
pub use item::{Graph, NodeIx, Weight};
#[doc(inline)]
pub use node::{Node, NodeId, NodeType};
