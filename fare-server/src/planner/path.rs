//! Shortest-path results and the errors that replace them.

use std::collections::HashMap;

use crate::domain::AirportCode;

/// Cheapest path between one origin and one destination.
///
/// An unreachable destination is not an error: it is represented by an
/// infinite cost and an empty path. Callers must check [`is_found`] before
/// using the path.
///
/// [`is_found`]: ShortestPath::is_found
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    /// Total fare along the path.
    pub cost: f64,
    /// Airports from origin to destination, inclusive.
    pub path: Vec<AirportCode>,
}

impl ShortestPath {
    /// The "no route" result.
    pub fn not_found() -> Self {
        Self {
            cost: f64::INFINITY,
            path: Vec::new(),
        }
    }

    /// The zero-cost route from an airport to itself.
    pub fn trivial(airport: AirportCode) -> Self {
        Self {
            cost: 0.0,
            path: vec![airport],
        }
    }

    /// Returns true if a route was found.
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }
}

/// A search that has no well-defined answer.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SolveError {
    /// A negative-cost cycle is reachable from the origin, so costs can be
    /// lowered without bound.
    #[error("negative-cost cycle reachable from {origin}: no well-defined cheapest route")]
    NegativeCycle { origin: AirportCode },

    /// Label-setting search met a negative fare it cannot handle.
    #[error("negative fare {fare} on {from} -> {to}: label-setting search requires non-negative fares")]
    NegativeFare {
        from: AirportCode,
        to: AirportCode,
        fare: f64,
    },
}

/// Follow predecessor links from `destination` back to `origin`.
///
/// Returns the path in travel order, or an empty path if the chain does not
/// reach the origin.
pub(super) fn reconstruct_path(
    predecessors: &HashMap<AirportCode, AirportCode>,
    origin: &AirportCode,
    destination: &AirportCode,
) -> Vec<AirportCode> {
    let mut path = vec![*destination];
    let mut current = *destination;

    while current != *origin {
        // A chain longer than the map can only be a cycle
        if path.len() > predecessors.len() + 1 {
            return Vec::new();
        }

        match predecessors.get(&current) {
            Some(previous) => {
                path.push(*previous);
                current = *previous;
            }
            None => return Vec::new(),
        }
    }

    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> AirportCode {
        AirportCode::parse(s).unwrap()
    }

    #[test]
    fn not_found_is_infinite_and_empty() {
        let result = ShortestPath::not_found();
        assert!(result.cost.is_infinite());
        assert!(result.path.is_empty());
        assert!(!result.is_found());
    }

    #[test]
    fn trivial_path() {
        let result = ShortestPath::trivial(code("ABE"));
        assert_eq!(result.cost, 0.0);
        assert_eq!(result.path, vec![code("ABE")]);
        assert!(result.is_found());
    }

    #[test]
    fn reconstructs_in_travel_order() {
        let predecessors = HashMap::from([
            (code("BBB"), code("AAA")),
            (code("CCC"), code("BBB")),
            (code("DDD"), code("CCC")),
        ]);

        let path = reconstruct_path(&predecessors, &code("AAA"), &code("DDD"));
        assert_eq!(path, vec![code("AAA"), code("BBB"), code("CCC"), code("DDD")]);
    }

    #[test]
    fn broken_chain_is_unreachable() {
        let predecessors = HashMap::from([(code("DDD"), code("CCC"))]);

        let path = reconstruct_path(&predecessors, &code("AAA"), &code("DDD"));
        assert!(path.is_empty());
    }

    #[test]
    fn cyclic_chain_is_unreachable() {
        let predecessors = HashMap::from([
            (code("BBB"), code("CCC")),
            (code("CCC"), code("BBB")),
        ]);

        let path = reconstruct_path(&predecessors, &code("AAA"), &code("BBB"));
        assert!(path.is_empty());
    }

    #[test]
    fn error_display() {
        let err = SolveError::NegativeCycle { origin: code("AAA") };
        assert_eq!(
            err.to_string(),
            "negative-cost cycle reachable from AAA: no well-defined cheapest route"
        );

        let err = SolveError::NegativeFare {
            from: code("AAA"),
            to: code("BBB"),
            fare: -3.5,
        };
        assert_eq!(
            err.to_string(),
            "negative fare -3.5 on AAA -> BBB: label-setting search requires non-negative fares"
        );
    }
}
