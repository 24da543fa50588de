//! Fare graph construction.
//!
//! Fare data is reported per undirected city pair, so every record is used
//! in both directions. For each directed airport pair only the cheapest
//! observation is kept, together with its descriptive detail.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, trace};

use crate::domain::{AirportCode, EdgeDetail, RouteRecord};

/// Directed fare graph: airport → reachable airport → cheapest direct fare.
///
/// Every airport that appears on either end of an edge is a node, even if it
/// has no outgoing edges. Iteration order is sorted by airport code.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteGraph {
    adjacency: BTreeMap<AirportCode, BTreeMap<AirportCode, f64>>,
}

impl RouteGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph directly from directed edges.
    ///
    /// Later edges for the same pair overwrite earlier ones. This is mostly
    /// useful for tests and for graphs that do not come from fare records.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (AirportCode, AirportCode, f64)>,
    {
        let mut graph = Self::new();
        for (from, to, fare) in edges {
            graph.set_edge(from, to, fare);
        }
        graph
    }

    fn set_edge(&mut self, from: AirportCode, to: AirportCode, fare: f64) {
        self.adjacency.entry(to).or_default();
        self.adjacency.entry(from).or_default().insert(to, fare);
    }

    /// Returns the direct fare from `from` to `to`, if there is an edge.
    pub fn fare(&self, from: &AirportCode, to: &AirportCode) -> Option<f64> {
        self.adjacency.get(from).and_then(|edges| edges.get(to)).copied()
    }

    /// Returns the outgoing edges of an airport.
    pub fn neighbors(&self, from: &AirportCode) -> impl Iterator<Item = (&AirportCode, f64)> {
        self.adjacency
            .get(from)
            .into_iter()
            .flat_map(|edges| edges.iter().map(|(to, fare)| (to, *fare)))
    }

    /// Returns all directed edges as `(from, to, fare)`.
    pub fn edges(&self) -> impl Iterator<Item = (&AirportCode, &AirportCode, f64)> {
        self.adjacency
            .iter()
            .flat_map(|(from, edges)| edges.iter().map(move |(to, fare)| (from, to, *fare)))
    }

    /// Returns all airports in sorted order.
    pub fn airports(&self) -> impl Iterator<Item = &AirportCode> {
        self.adjacency.keys()
    }

    /// Check if an airport is a node of the graph.
    pub fn contains(&self, airport: &AirportCode) -> bool {
        self.adjacency.contains_key(airport)
    }

    /// Returns the number of airports.
    pub fn airport_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeMap::len).sum()
    }

    /// Returns true if the graph has no airports.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

/// Detail for every edge retained in a [`RouteGraph`], keyed by direction.
#[derive(Debug, Clone, Default)]
pub struct EdgeMetadata {
    edges: HashMap<(AirportCode, AirportCode), EdgeDetail>,
}

impl EdgeMetadata {
    /// Look up the detail for a directed edge.
    pub fn get(&self, from: &AirportCode, to: &AirportCode) -> Option<&EdgeDetail> {
        self.edges.get(&(*from, *to))
    }

    /// Returns the number of directed edges described.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if no edges are described.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Parse both airport codes of a record, or `None` if either is unusable.
fn record_endpoints(record: &RouteRecord) -> Option<(AirportCode, AirportCode)> {
    let origin = AirportCode::parse_normalized(&record.origin_airport).ok()?;
    let destination = AirportCode::parse_normalized(&record.destination_airport).ok()?;
    Some((origin, destination))
}

/// Build the minimum-fare graph and its edge metadata from fare records.
///
/// Each record contributes its own direction and a mirrored reverse edge. A
/// candidate edge replaces the retained one only if its fare is strictly
/// lower, so among equal fares the first record in input order wins and
/// supplies the reported carrier and distance.
///
/// Records with an empty or malformed airport code on either side are
/// skipped. Fares are not validated here: filtering bad rows is the loader's
/// job.
pub fn build_graph(records: &[RouteRecord]) -> (RouteGraph, EdgeMetadata) {
    let mut graph = RouteGraph::new();
    let mut metadata = EdgeMetadata::default();
    let mut skipped = 0usize;

    for record in records {
        let Some((origin, destination)) = record_endpoints(record) else {
            trace!(
                origin = %record.origin_airport,
                destination = %record.destination_airport,
                "Skipping record without usable airport codes"
            );
            skipped += 1;
            continue;
        };

        let forward = EdgeDetail::from_record(record, origin, destination);
        let reverse = forward.mirrored();

        for candidate in [forward, reverse] {
            let from = candidate.origin_airport;
            let to = candidate.destination_airport;

            let improves = graph
                .fare(&from, &to)
                .is_none_or(|current| candidate.fare < current);
            if !improves {
                continue;
            }

            graph.set_edge(from, to, candidate.fare);
            metadata.edges.insert((from, to), candidate);
        }
    }

    debug!(
        records = records.len(),
        skipped,
        airports = graph.airport_count(),
        edges = graph.edge_count(),
        "Built fare graph"
    );

    (graph, metadata)
}
