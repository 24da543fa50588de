//! Fare dataset ingestion.
//!
//! Reads the aviation fare CSV (one row per city-pair market) into
//! [`RouteRecord`](crate::domain::RouteRecord)s ready for the graph builder.

mod error;
mod reader;

pub use error::DatasetError;
pub use reader::{LoadedRoutes, load_routes, read_routes};
