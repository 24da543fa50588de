//! Askama templates for the web frontend.

use askama::Template;

use crate::planner::Algorithm;

use super::dto::{AlgorithmResult, RouteResponse, SegmentResult, format_count, format_money};

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with the route search form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub airports: Vec<String>,
    pub cities: Vec<String>,
    pub algorithms: Vec<AlgorithmOption>,
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Route results fragment.
#[derive(Template)]
#[template(path = "route_results.html")]
pub struct RouteResultsTemplate {
    pub origin: String,
    pub destination: String,
    pub algorithm_label: String,
    pub total_fare: String,
    /// e.g. "ABE → ORD → PIE"
    pub path: String,
    pub segments: Vec<SegmentView>,
    pub comparison: Vec<ComparisonView>,
}

impl RouteResultsTemplate {
    /// Create from a route response.
    pub fn from_response(route: &RouteResponse) -> Self {
        Self {
            origin: route.origin.clone(),
            destination: route.destination.clone(),
            algorithm_label: route.algorithm_label.clone(),
            total_fare: format_money(route.total_fare),
            path: route.path.join(" → "),
            segments: route.segments.iter().map(SegmentView::from_result).collect(),
            comparison: route
                .comparison
                .iter()
                .map(|result| ComparisonView::from_result(result, &route.algorithm))
                .collect(),
        }
    }

    /// Number of connections between origin and destination.
    pub fn stops(&self) -> usize {
        self.segments.len().saturating_sub(1)
    }
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// An algorithm choice in the search form.
#[derive(Debug, Clone)]
pub struct AlgorithmOption {
    pub key: String,
    pub label: String,
    pub selected: bool,
}

impl AlgorithmOption {
    /// One option per algorithm, with `default` pre-selected.
    pub fn all(default: Algorithm) -> Vec<Self> {
        Algorithm::ALL
            .into_iter()
            .map(|algorithm| Self {
                key: algorithm.key().to_string(),
                label: algorithm.label().to_string(),
                selected: algorithm == default,
            })
            .collect()
    }
}

/// Segment view model for templates.
#[derive(Debug, Clone)]
pub struct SegmentView {
    pub from: String,
    pub to: String,
    pub fare: String,
    pub carrier: String,
    pub passengers: String,
    pub miles: String,
}

impl SegmentView {
    /// Create from a segment result.
    pub fn from_result(segment: &SegmentResult) -> Self {
        Self {
            from: format!("{} ({})", segment.origin_city, segment.origin_airport),
            to: format!("{} ({})", segment.destination_city, segment.destination_airport),
            fare: format_money(segment.fare),
            carrier: segment.carrier.clone().unwrap_or_else(|| "—".to_string()),
            passengers: format_count(segment.passengers),
            miles: format_count(segment.miles),
        }
    }
}

/// Algorithm comparison row.
#[derive(Debug, Clone)]
pub struct ComparisonView {
    pub label: String,
    /// Fare, "No route", or the reason the search failed
    pub outcome: String,
    pub pair: String,
    pub runtime: String,
    /// This algorithm's route is the one shown
    pub is_selected: bool,
}

impl ComparisonView {
    /// Create from an algorithm result; `selected` is the key of the
    /// algorithm whose route is displayed.
    pub fn from_result(result: &AlgorithmResult, selected: &str) -> Self {
        let outcome = match (&result.cost, &result.error) {
            (Some(cost), _) => format_money(*cost),
            (None, Some(error)) => error.clone(),
            (None, None) => "No route".to_string(),
        };
        let pair = match (&result.origin_airport, &result.destination_airport) {
            (Some(origin), Some(destination)) => format!("{origin} → {destination}"),
            _ => "—".to_string(),
        };

        Self {
            label: result.label.clone(),
            outcome,
            pair,
            runtime: format!("{:.3} ms", result.runtime_ms),
            is_selected: result.algorithm == selected,
        }
    }
}
