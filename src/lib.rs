#![doc = include_str!("../README.md")]

#[cfg(feature = "mimalloc")]
use mimalloc::MiMalloc;
#[cfg_attr(feature = "mimalloc", global_allocator)]
#[cfg(feature = "mimalloc")]
static GLOBAL: MiMalloc = MiMalloc;

pub mod graph;
pub mod route;
pub mod service;
pub mod util;

use graph::GraphError;
use route::RouteError;
use service::ServiceError;

/// Aggregate error over every fallible surface of the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Graph(GraphError),
    #[error(transparent)]
    Route(RouteError),
    #[error(transparent)]
    Service(ServiceError),
}

crate::impl_err!(GraphError, Graph);
crate::impl_err!(RouteError, Route);
crate::impl_err!(ServiceError, Service);

pub type Result<T> = std::result::Result<T, Error>;

#[doc(inline)]
pub use graph::{Graph, GraphBuilder, MapSnapshot};
#[doc(inline)]
pub use route::{find_path, Algorithm, CostModel, Route, SearchLimits, SearchOutcome};
#[doc(inline)]
pub use service::{PathRequest, PathResponse, PathService};
