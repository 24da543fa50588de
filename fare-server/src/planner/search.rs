//! Cheapest route across sets of candidate origin and destination airports.
//!
//! A city can be served by several airports, so a city-to-city request is
//! answered by trying every (origin, destination) airport pairing and keeping
//! the cheapest. An airport-to-airport request is the same search over
//! singleton sets.

use rayon::prelude::*;
use tracing::debug;

use crate::domain::AirportCode;
use crate::graph::RouteGraph;

use super::algorithm::Algorithm;
use super::path::{ShortestPath, SolveError};

/// Result of a multi-candidate search.
#[derive(Debug, Clone, PartialEq)]
pub struct BestRoute {
    /// Total fare of the chosen path.
    pub cost: f64,
    /// Airports from the chosen origin to the chosen destination.
    pub path: Vec<AirportCode>,
    /// The (origin, destination) pairing that produced the path.
    pub pair: Option<(AirportCode, AirportCode)>,
}

impl BestRoute {
    /// The "no route for any pairing" result.
    pub fn not_found() -> Self {
        Self {
            cost: f64::INFINITY,
            path: Vec::new(),
            pair: None,
        }
    }

    /// Returns true if some pairing produced a route.
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Keep `candidate` if it is strictly cheaper than the current best.
    ///
    /// Ties keep the route already held, so the first pairing in enumeration
    /// order wins.
    fn consider(&mut self, origin: AirportCode, destination: AirportCode, candidate: ShortestPath) {
        if candidate.is_found() && candidate.cost < self.cost {
            self.cost = candidate.cost;
            self.path = candidate.path;
            self.pair = Some((origin, destination));
        }
    }
}

/// Find the cheapest route over every (origin, destination) pairing.
///
/// Pairings are enumerated with origins in the outer loop and destinations in
/// the inner loop; among equally cheap routes the first enumerated wins. If
/// any pairing has no well-defined answer the whole search fails with that
/// error.
pub fn find_best(
    graph: &RouteGraph,
    origins: &[AirportCode],
    destinations: &[AirportCode],
    algorithm: Algorithm,
) -> Result<BestRoute, SolveError> {
    let mut best = BestRoute::not_found();

    for origin in origins {
        for destination in destinations {
            let candidate = algorithm.solve(graph, origin, destination)?;
            best.consider(*origin, *destination, candidate);
        }
    }

    debug!(
        algorithm = algorithm.key(),
        pairings = origins.len() * destinations.len(),
        found = best.is_found(),
        "Candidate search complete"
    );

    Ok(best)
}

/// Same as [`find_best`], solving the pairings on the rayon thread pool.
///
/// All results are collected in enumeration order before selecting, so the
/// answer (including tie-breaks and which error is reported) is identical to
/// the sequential search.
pub fn find_best_parallel(
    graph: &RouteGraph,
    origins: &[AirportCode],
    destinations: &[AirportCode],
    algorithm: Algorithm,
) -> Result<BestRoute, SolveError> {
    let pairings: Vec<(AirportCode, AirportCode)> = origins
        .iter()
        .flat_map(|origin| destinations.iter().map(move |destination| (*origin, *destination)))
        .collect();

    let results: Vec<Result<ShortestPath, SolveError>> = pairings
        .par_iter()
        .map(|(origin, destination)| algorithm.solve(graph, origin, destination))
        .collect();

    let mut best = BestRoute::not_found();
    for ((origin, destination), result) in pairings.into_iter().zip(results) {
        best.consider(origin, destination, result?);
    }

    debug!(
        algorithm = algorithm.key(),
        pairings = origins.len() * destinations.len(),
        found = best.is_found(),
        "Parallel candidate search complete"
    );

    Ok(best)
}
