use thiserror::Error;

use crate::route::error::RouteError;

/// Request rejection at the service boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServiceError {
    /// The algorithm name is outside the supported set
    /// (`A*`, `Dijkstra`, `BFS`, `DFS`).
    #[error("unsupported algorithm {0}")]
    UnsupportedAlgorithm(String),

    /// Engine-level request validation, propagated unchanged.
    #[error(transparent)]
    Route(#[from] RouteError),
}
