//! Cheapest-fare route planning.
//!
//! This module answers: "what is the cheapest way to fly from here to
//! there, possibly with connections?"
//!
//! Two single-pair algorithms are provided: Dijkstra's label-setting search
//! for non-negative fares and Bellman–Ford's label-correcting search, which
//! also detects negative-cost cycles. On top of them, the candidate search
//! tries every airport pairing of a city-to-city request and keeps the
//! cheapest.

mod algorithm;
mod bellman_ford;
mod compare;
mod config;
mod dijkstra;
mod path;
mod query;
mod search;
mod summary;

pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use bellman_ford::bellman_ford;
pub use compare::{AlgorithmRun, Comparison, compare};
pub use config::SearchConfig;
pub use dijkstra::dijkstra;
pub use path::{ShortestPath, SolveError};
pub use query::{Candidates, Endpoint, QueryError, RouteQuery};
pub use search::{BestRoute, find_best, find_best_parallel};
pub use summary::{MissingEdge, summarize};
