//! The loaded fare network shared by every query.

use tracing::info;

use crate::domain::{AirportCode, RouteRecord, Segment};
use crate::graph::{CityAirportIndex, EdgeMetadata, RouteGraph, build_graph};
use crate::planner::{MissingEdge, summarize};

/// Everything built from one dataset load.
///
/// Construct it once at startup and share it behind an `Arc`; nothing
/// mutates it afterwards, so concurrent queries need no locking.
#[derive(Debug, Clone, Default)]
pub struct FareNetwork {
    graph: RouteGraph,
    metadata: EdgeMetadata,
    cities: CityAirportIndex,
}

impl FareNetwork {
    /// Build the graph, edge metadata and city index from fare records.
    pub fn from_records(records: &[RouteRecord]) -> Self {
        let (graph, metadata) = build_graph(records);
        let cities = CityAirportIndex::from_records(records);

        info!(
            records = records.len(),
            airports = graph.airport_count(),
            edges = graph.edge_count(),
            cities = cities.len(),
            "Fare network ready"
        );

        Self {
            graph,
            metadata,
            cities,
        }
    }

    /// Returns the minimum-fare graph.
    pub fn graph(&self) -> &RouteGraph {
        &self.graph
    }

    /// Returns the detail of every retained edge.
    pub fn metadata(&self) -> &EdgeMetadata {
        &self.metadata
    }

    /// Returns the city → airports lookup.
    pub fn cities(&self) -> &CityAirportIndex {
        &self.cities
    }

    /// Returns all airports in sorted order.
    pub fn airports(&self) -> impl Iterator<Item = &AirportCode> {
        self.graph.airports()
    }

    /// Segments for a path found over this network.
    pub fn summarize(&self, path: &[AirportCode]) -> Result<Vec<Segment>, MissingEdge> {
        summarize(path, &self.metadata)
    }
}
