//! Domain types for the fare planner.
//!
//! Airport codes are validated at construction time; fare records are kept
//! in their ingested shape until the graph builder orients them into
//! directed edges.

mod airport;
mod route;

pub use airport::{AirportCode, InvalidAirportCode};
pub use route::{EdgeDetail, RouteRecord, Segment};
