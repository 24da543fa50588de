//! Label-setting search (Dijkstra) over a binary heap.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};

use tracing::trace;

use crate::domain::AirportCode;
use crate::graph::RouteGraph;

use super::path::{ShortestPath, SolveError, reconstruct_path};

/// Heap entry: tentative cost to reach an airport.
#[derive(Debug, Clone, Copy)]
struct Frontier {
    cost: f64,
    airport: AirportCode,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.airport.cmp(&other.airport))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Cheapest path from `origin` to `destination` using label-setting search.
///
/// Each airport is finalized the first time it is popped from the frontier
/// and never relaxed again. Heap entries made stale by a later, cheaper
/// relaxation are skipped on pop. The search stops as soon as the
/// destination is finalized.
///
/// Fares must be non-negative; a negative fare met during relaxation is
/// reported as [`SolveError::NegativeFare`] rather than silently producing a
/// wrong answer.
pub fn dijkstra(
    graph: &RouteGraph,
    origin: &AirportCode,
    destination: &AirportCode,
) -> Result<ShortestPath, SolveError> {
    if origin == destination {
        return Ok(ShortestPath::trivial(*origin));
    }

    let mut best: HashMap<AirportCode, f64> = HashMap::new();
    let mut predecessors: HashMap<AirportCode, AirportCode> = HashMap::new();
    let mut visited: HashSet<AirportCode> = HashSet::new();
    let mut frontier = BinaryHeap::new();

    best.insert(*origin, 0.0);
    frontier.push(Reverse(Frontier {
        cost: 0.0,
        airport: *origin,
    }));

    while let Some(Reverse(Frontier { cost, airport })) = frontier.pop() {
        if visited.contains(&airport) {
            continue;
        }
        if best.get(&airport).is_some_and(|&known| cost > known) {
            continue;
        }

        visited.insert(airport);
        if airport == *destination {
            break;
        }

        for (next, fare) in graph.neighbors(&airport) {
            if fare < 0.0 {
                return Err(SolveError::NegativeFare {
                    from: airport,
                    to: *next,
                    fare,
                });
            }
            if visited.contains(next) {
                continue;
            }

            let candidate = cost + fare;
            if best.get(next).is_none_or(|&known| candidate < known) {
                best.insert(*next, candidate);
                predecessors.insert(*next, airport);
                frontier.push(Reverse(Frontier {
                    cost: candidate,
                    airport: *next,
                }));
            }
        }
    }

    trace!(
        origin = %origin,
        destination = %destination,
        visited = visited.len(),
        "Dijkstra search finished"
    );

    let Some(&cost) = best.get(destination) else {
        return Ok(ShortestPath::not_found());
    };

    let path = reconstruct_path(&predecessors, origin, destination);
    if path.is_empty() {
        return Ok(ShortestPath::not_found());
    }

    Ok(ShortestPath { cost, path })
}
