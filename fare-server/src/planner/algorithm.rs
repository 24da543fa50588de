//! The shortest-path algorithms available to the planner.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::AirportCode;
use crate::graph::RouteGraph;

use super::bellman_ford::bellman_ford;
use super::dijkstra::dijkstra;
use super::path::{ShortestPath, SolveError};

/// A single-origin, single-destination cheapest-path algorithm.
///
/// The set is closed: every variant answers the same question with the same
/// signature, so they can be compared on identical requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Label-setting search; fares must be non-negative.
    #[default]
    Dijkstra,
    /// Label-correcting search; tolerates negative fares, detects negative cycles.
    BellmanFord,
}

/// Error returned when parsing an unknown algorithm key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm {0:?} (expected \"dijkstra\" or \"bellman-ford\")")]
pub struct UnknownAlgorithm(pub String);

impl Algorithm {
    /// Every algorithm, in display order.
    pub const ALL: [Algorithm; 2] = [Algorithm::Dijkstra, Algorithm::BellmanFord];

    /// Stable key used in URLs and configuration.
    pub fn key(&self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::BellmanFord => "bellman-ford",
        }
    }

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "Dijkstra's algorithm",
            Algorithm::BellmanFord => "Bellman–Ford",
        }
    }

    /// Cheapest path from `origin` to `destination`.
    pub fn solve(
        &self,
        graph: &RouteGraph,
        origin: &AirportCode,
        destination: &AirportCode,
    ) -> Result<ShortestPath, SolveError> {
        match self {
            Algorithm::Dijkstra => dijkstra(graph, origin, destination),
            Algorithm::BellmanFord => bellman_ford(graph, origin, destination),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.key() == key)
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const AIRPORTS: [&str; 6] = ["AAA", "BBB", "CCC", "DDD", "EEE", "FFF"];

    fn code(s: &str) -> AirportCode {
        AirportCode::parse(s).unwrap()
    }

    /// Graphs with small integer fares, so sums are exact in f64.
    fn graph_strategy() -> impl Strategy<Value = RouteGraph> {
        prop::collection::vec(
            (
                prop::sample::select(AIRPORTS.to_vec()),
                prop::sample::select(AIRPORTS.to_vec()),
                0u32..200,
            ),
            0..20,
        )
        .prop_map(|edges| {
            RouteGraph::from_edges(
                edges
                    .into_iter()
                    .map(|(from, to, fare)| (code(from), code(to), fare as f64)),
            )
        })
    }

    fn airport_strategy() -> impl Strategy<Value = AirportCode> {
        prop::sample::select(AIRPORTS.to_vec()).prop_map(code)
    }

    proptest! {
        /// Both algorithms agree on cost and reachability
        #[test]
        fn algorithms_agree(
            graph in graph_strategy(),
            origin in airport_strategy(),
            destination in airport_strategy(),
        ) {
            let a = Algorithm::Dijkstra.solve(&graph, &origin, &destination).unwrap();
            let b = Algorithm::BellmanFord.solve(&graph, &origin, &destination).unwrap();

            prop_assert_eq!(a.is_found(), b.is_found());
            prop_assert_eq!(a.cost, b.cost);
        }

        /// Found paths run origin to destination over real edges whose fares sum to the cost
        #[test]
        fn paths_are_valid(
            graph in graph_strategy(),
            origin in airport_strategy(),
            destination in airport_strategy(),
        ) {
            for algorithm in Algorithm::ALL {
                let result = algorithm.solve(&graph, &origin, &destination).unwrap();
                if !result.is_found() {
                    prop_assert!(result.cost.is_infinite());
                    continue;
                }

                prop_assert_eq!(result.path.first(), Some(&origin));
                prop_assert_eq!(result.path.last(), Some(&destination));

                let mut total = 0.0;
                for pair in result.path.windows(2) {
                    let fare = graph.fare(&pair[0], &pair[1]);
                    prop_assert!(fare.is_some(), "{} -> {} is not an edge", pair[0], pair[1]);
                    total += fare.unwrap_or_default();
                }
                prop_assert_eq!(total, result.cost);
            }
        }

        /// Solving from an airport to itself is free
        #[test]
        fn self_route_is_free(graph in graph_strategy(), airport in airport_strategy()) {
            for algorithm in Algorithm::ALL {
                let result = algorithm.solve(&graph, &airport, &airport).unwrap();
                prop_assert_eq!(result.cost, 0.0);
                prop_assert_eq!(result.path, vec![airport]);
            }
        }
    }
}
