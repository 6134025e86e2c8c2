#[doc(hidden)]
pub mod algorithm;
#[doc(hidden)]
pub mod costing;
#[doc(hidden)]
pub mod engine;
#[doc(hidden)]
pub mod error;
#[doc(hidden)]
pub mod path;

#[doc(inline)]
pub use algorithm::Algorithm;
#[doc(inline)]
pub use costing::CostModel;
#[doc(inline)]
pub use engine::find_path;
#[doc(inline)]
pub use error::RouteError;
#[doc(inline)]
pub use path::{Route, SearchLimits, SearchOutcome};
