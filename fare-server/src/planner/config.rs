//! Search configuration for the fare planner.

use super::Algorithm;

/// Configuration parameters for route search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Algorithm whose answer is presented when a request names none.
    pub default_algorithm: Algorithm,

    /// Solve candidate pairings on the rayon pool.
    pub parallel: bool,

    /// Minimum number of (origin, destination) pairings before the parallel
    /// search is used. Below this the thread handoff costs more than it saves.
    pub parallel_min_pairings: usize,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(default_algorithm: Algorithm, parallel: bool, parallel_min_pairings: usize) -> Self {
        Self {
            default_algorithm,
            parallel,
            parallel_min_pairings,
        }
    }

    /// Whether a search over `pairings` pairings should run in parallel.
    pub fn use_parallel(&self, pairings: usize) -> bool {
        self.parallel && pairings >= self.parallel_min_pairings
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_algorithm: Algorithm::Dijkstra,
            parallel: true,
            parallel_min_pairings: 4,
        }
    }
}
