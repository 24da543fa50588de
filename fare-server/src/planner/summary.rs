//! Turning a path into presentable itinerary segments.

use crate::domain::{AirportCode, Segment};
use crate::graph::EdgeMetadata;

/// A path step has no edge metadata.
///
/// Paths only come from searches over the graph that was built alongside
/// the metadata, so this means the two have drifted apart. It is an internal
/// error, never a user-facing one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no edge metadata for {from} -> {to}: fare graph and edge metadata are out of sync")]
pub struct MissingEdge {
    pub from: AirportCode,
    pub to: AirportCode,
}

/// One segment per consecutive pair of airports in `path`.
///
/// A path of N airports produces N−1 segments; single-airport and empty
/// paths produce none.
pub fn summarize(path: &[AirportCode], metadata: &EdgeMetadata) -> Result<Vec<Segment>, MissingEdge> {
    path.windows(2)
        .map(|pair| {
            let (from, to) = (pair[0], pair[1]);
            metadata
                .get(&from, &to)
                .cloned()
                .map(Segment::new)
                .ok_or(MissingEdge { from, to })
        })
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::RouteRecord;
    use crate::graph::build_graph;
    use crate::planner::Algorithm;
    use proptest::prelude::*;

    const AIRPORTS: [&str; 5] = ["AAA", "BBB", "CCC", "DDD", "EEE"];

    fn records_strategy() -> impl Strategy<Value = Vec<RouteRecord>> {
        prop::collection::vec(
            (
                prop::sample::select(AIRPORTS.to_vec()),
                prop::sample::select(AIRPORTS.to_vec()),
                0u32..300,
            )
                .prop_map(|(o, d, fare)| RouteRecord::new("C1", "C2", o, d, fare as f64)),
            1..15,
        )
    }

    proptest! {
        /// Every segment's fare is the graph weight of the edge the search used
        #[test]
        fn segments_match_graph_weights(
            records in records_strategy(),
            origin in prop::sample::select(AIRPORTS.to_vec()),
            destination in prop::sample::select(AIRPORTS.to_vec()),
        ) {
            let (graph, metadata) = build_graph(&records);
            let origin = AirportCode::parse(origin).unwrap();
            let destination = AirportCode::parse(destination).unwrap();

            let result = Algorithm::Dijkstra.solve(&graph, &origin, &destination).unwrap();
            let segments = summarize(&result.path, &metadata).unwrap();

            prop_assert_eq!(segments.len(), result.path.len().saturating_sub(1));
            for (segment, pair) in segments.iter().zip(result.path.windows(2)) {
                prop_assert_eq!(segment.origin_airport(), &pair[0]);
                prop_assert_eq!(segment.destination_airport(), &pair[1]);
                prop_assert_eq!(Some(segment.fare()), graph.fare(&pair[0], &pair[1]));
            }
        }
    }
}
