//! Label-correcting search (Bellman–Ford).
//!
//! Slower than [`dijkstra`](super::dijkstra) on fare data, but tolerates
//! negative edge weights and can tell "unreachable" apart from "no
//! well-defined answer" when a negative cycle is reachable.

use std::collections::HashMap;

use tracing::trace;

use crate::domain::AirportCode;
use crate::graph::RouteGraph;

use super::path::{ShortestPath, SolveError, reconstruct_path};

/// Cheapest path from `origin` to `destination` using edge relaxation.
///
/// Runs at most `airports - 1` passes over every edge, stopping early after
/// a pass that improves nothing. One more pass then checks that no edge out
/// of a reached airport can still be improved; if one can, a negative cycle
/// is reachable from the origin and [`SolveError::NegativeCycle`] is
/// returned instead of an unstable cost.
pub fn bellman_ford(
    graph: &RouteGraph,
    origin: &AirportCode,
    destination: &AirportCode,
) -> Result<ShortestPath, SolveError> {
    if origin == destination {
        return Ok(ShortestPath::trivial(*origin));
    }

    let mut best: HashMap<AirportCode, f64> = HashMap::from([(*origin, 0.0)]);
    let mut predecessors: HashMap<AirportCode, AirportCode> = HashMap::new();

    let max_passes = graph.airport_count().saturating_sub(1);
    let mut passes = 0;

    for _ in 0..max_passes {
        passes += 1;
        if !relax_all(graph, &mut best, &mut predecessors) {
            break;
        }
    }

    let cycle = graph.edges().any(|(from, to, fare)| {
        best.get(from)
            .is_some_and(|&base| best.get(to).is_none_or(|&known| base + fare < known))
    });
    if cycle {
        return Err(SolveError::NegativeCycle { origin: *origin });
    }

    trace!(
        origin = %origin,
        destination = %destination,
        passes,
        reached = best.len(),
        "Bellman-Ford search finished"
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

/// One pass over every edge. Returns true if any cost improved.
fn relax_all(
    graph: &RouteGraph,
    best: &mut HashMap<AirportCode, f64>,
    predecessors: &mut HashMap<AirportCode, AirportCode>,
) -> bool {
    let mut improved = false;

    for (from, to, fare) in graph.edges() {
        let Some(&base) = best.get(from) else {
            continue;
        };

        let candidate = base + fare;
        if best.get(to).is_none_or(|&known| candidate < known) {
            best.insert(*to, candidate);
            predecessors.insert(*to, *from);
            improved = true;
        }
    }

    improved
}
