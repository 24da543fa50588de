//! Running every algorithm on the same request.
//!
//! Each algorithm searches the same candidate airports, so the results show
//! both that they agree and how long each took.

use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::network::FareNetwork;

use super::algorithm::Algorithm;
use super::config::SearchConfig;
use super::path::SolveError;
use super::query::{Candidates, QueryError, RouteQuery};
use super::search::{BestRoute, find_best, find_best_parallel};

/// One algorithm's answer to a request.
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmRun {
    pub algorithm: Algorithm,
    pub outcome: Result<BestRoute, SolveError>,
    /// Wall-clock time of the whole candidate search.
    pub runtime: Duration,
}

impl AlgorithmRun {
    /// The route, if the search succeeded and found one.
    pub fn route(&self) -> Option<&BestRoute> {
        self.outcome.as_ref().ok().filter(|route| route.is_found())
    }
}

/// Every algorithm's answer to one request.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub candidates: Candidates,
    /// One run per algorithm, in [`Algorithm::ALL`] order.
    pub runs: Vec<AlgorithmRun>,
}

impl Comparison {
    /// Returns the run for one algorithm.
    pub fn run_for(&self, algorithm: Algorithm) -> Option<&AlgorithmRun> {
        self.runs.iter().find(|run| run.algorithm == algorithm)
    }
}

/// Resolve `query` and search it with every algorithm.
///
/// A failure in one algorithm (e.g. a negative cycle) is recorded in its run
/// and does not prevent the others from running.
pub fn compare(
    network: &FareNetwork,
    query: &RouteQuery,
    config: &SearchConfig,
) -> Result<Comparison, QueryError> {
    let candidates = query.resolve(network)?;

    let runs = Algorithm::ALL
        .into_iter()
        .map(|algorithm| run_algorithm(network, &candidates, algorithm, config))
        .collect();

    Ok(Comparison { candidates, runs })
}

fn run_algorithm(
    network: &FareNetwork,
    candidates: &Candidates,
    algorithm: Algorithm,
    config: &SearchConfig,
) -> AlgorithmRun {
    let search = if config.use_parallel(candidates.pairings()) {
        find_best_parallel
    } else {
        find_best
    };

    let started = Instant::now();
    let outcome = search(
        network.graph(),
        &candidates.origins,
        &candidates.destinations,
        algorithm,
    );
    let runtime = started.elapsed();

    match &outcome {
        Ok(route) => debug!(
            algorithm = algorithm.key(),
            cost = route.cost,
            hops = route.path.len().saturating_sub(1),
            runtime_us = runtime.as_micros() as u64,
            "Algorithm run complete"
        ),
        Err(e) => warn!(
            algorithm = algorithm.key(),
            error = %e,
            "Algorithm run has no well-defined answer"
        ),
    }

    AlgorithmRun {
        algorithm,
        outcome,
        runtime,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AirportCode, RouteRecord};

    fn code(s: &str) -> AirportCode {
        AirportCode::parse(s).unwrap()
    }

    fn network() -> FareNetwork {
        FareNetwork::from_records(&[
            RouteRecord::new("Allentown, PA", "Tampa, FL", "ABE", "PIE", 260.0),
            RouteRecord::new("Allentown, PA", "Chicago, IL", "ABE", "ORD", 120.0),
            RouteRecord::new("Chicago, IL", "Tampa, FL", "ORD", "PIE", 75.0),
            RouteRecord::new("Chicago, IL", "Tampa, FL", "MDW", "TPA", 60.0),
            RouteRecord::new("Allentown, PA", "Chicago, IL", "ABE", "MDW", 150.0),
        ])
    }

    #[test]
    fn runs_every_algorithm_in_order() {
        let query = RouteQuery::airports(code("ABE"), code("PIE"));
        let comparison = compare(&network(), &query, &SearchConfig::default()).unwrap();

        let algorithms: Vec<Algorithm> = comparison.runs.iter().map(|r| r.algorithm).collect();
        assert_eq!(algorithms, Algorithm::ALL.to_vec());

        for run in &comparison.runs {
            let route = run.route().unwrap();
            assert_eq!(route.cost, 195.0);
            assert_eq!(route.path, vec![code("ABE"), code("ORD"), code("PIE")]);
            assert_eq!(route.pair, Some((code("ABE"), code("PIE"))));
        }
    }

    #[test]
    fn city_query_picks_cheapest_pairing() {
        let query = RouteQuery::cities("Allentown, PA", "Tampa, FL");
        let sequential = SearchConfig::new(Algorithm::Dijkstra, false, 1);
        let parallel = SearchConfig::new(Algorithm::Dijkstra, true, 1);

        let a = compare(&network(), &query, &sequential).unwrap();
        let b = compare(&network(), &query, &parallel).unwrap();

        for comparison in [&a, &b] {
            assert_eq!(comparison.candidates.pairings(), 2);
            let run = comparison.run_for(Algorithm::BellmanFord).unwrap();
            let route = run.route().unwrap();
            assert_eq!(route.cost, 195.0);
            assert_eq!(route.pair, Some((code("ABE"), code("PIE"))));
        }
    }

    #[test]
    fn query_errors_are_returned_before_searching() {
        let query = RouteQuery::cities("Atlantis", "Tampa, FL");
        let result = compare(&network(), &query, &SearchConfig::default());

        assert_eq!(result, Err(QueryError::UnknownCity("Atlantis".to_string())));
    }

    #[test]
    fn one_algorithm_failing_does_not_hide_the_other() {
        let network = FareNetwork::from_records(&[
            RouteRecord::new("A", "B", "AAA", "BBB", 10.0),
            RouteRecord::new("B", "C", "BBB", "CCC", -1.0),
        ]);
        let query = RouteQuery::airports(code("AAA"), code("CCC"));
        let comparison = compare(&network, &query, &SearchConfig::default()).unwrap();

        let dijkstra = comparison.run_for(Algorithm::Dijkstra).unwrap();
        assert!(matches!(dijkstra.outcome, Err(SolveError::NegativeFare { .. })));
        assert!(dijkstra.route().is_none());

        // The mirrored -1 edge makes BBB<->CCC a negative cycle
        let bellman_ford = comparison.run_for(Algorithm::BellmanFord).unwrap();
        assert_eq!(
            bellman_ford.outcome,
            Err(SolveError::NegativeCycle { origin: code("AAA") })
        );
    }

    #[test]
    fn unreachable_route_is_not_an_error() {
        let network = FareNetwork::from_records(&[
            RouteRecord::new("A", "B", "AAA", "BBB", 10.0),
            RouteRecord::new("C", "D", "CCC", "DDD", 10.0),
        ]);
        let query = RouteQuery::airports(code("AAA"), code("DDD"));
        let comparison = compare(&network, &query, &SearchConfig::default()).unwrap();

        for run in &comparison.runs {
            assert_eq!(run.outcome, Ok(BestRoute::not_found()));
            assert!(run.route().is_none());
        }
    }
}
