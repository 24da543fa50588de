//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Segment;
use crate::planner::AlgorithmRun;

/// Whether a route request names airports or cities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    #[default]
    Airport,
    City,
}

/// Request for the cheapest route.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteRequest {
    /// Origin airport code or city name, depending on `mode`
    pub origin: String,

    /// Destination airport code or city name, depending on `mode`
    pub destination: String,

    #[serde(default)]
    pub mode: SearchMode,

    /// Algorithm key (e.g. "bellman-ford"); defaults to the server's choice
    pub algorithm: Option<String>,

    /// City mode only: search every airport pairing (default true)
    pub auto_select: Option<bool>,

    /// City mode without auto-select: airport to use for the origin city
    pub origin_airport: Option<String>,

    /// City mode without auto-select: airport to use for the destination city
    pub destination_airport: Option<String>,
}

/// All airports in the fare graph.
#[derive(Debug, Serialize)]
pub struct AirportListResponse {
    pub airports: Vec<String>,
}

/// A city and the airports serving it.
#[derive(Debug, Serialize)]
pub struct CityResult {
    pub name: String,
    pub airports: Vec<String>,
}

/// All cities in the fare dataset.
#[derive(Debug, Serialize)]
pub struct CityListResponse {
    pub cities: Vec<CityResult>,
}

/// The cheapest route found for a request.
#[derive(Debug, Clone, Serialize)]
pub struct RouteResponse {
    /// Origin as requested, with the airport used, e.g. "Boston, MA (BOS)"
    pub origin: String,

    /// Destination as requested, with the airport used
    pub destination: String,

    /// Airport the route departs from
    pub origin_airport: String,

    /// Airport the route arrives at
    pub destination_airport: String,

    /// Key of the algorithm whose answer this is
    pub algorithm: String,

    /// Human-readable algorithm name
    pub algorithm_label: String,

    /// Sum of segment fares, in dollars
    pub total_fare: f64,

    /// Airports visited, in order
    pub path: Vec<String>,

    /// One entry per flight
    pub segments: Vec<SegmentResult>,

    /// Every algorithm's answer to the same request
    pub comparison: Vec<AlgorithmResult>,
}

/// One flight of a route.
#[derive(Debug, Clone, Serialize)]
pub struct SegmentResult {
    pub origin_city: String,
    pub origin_airport: String,
    pub destination_city: String,
    pub destination_airport: String,

    /// Fare in dollars
    pub fare: f64,

    /// Carrier with the largest market share
    pub carrier: Option<String>,

    pub passengers: Option<f64>,

    /// Non-stop distance
    pub miles: Option<f64>,
}

impl SegmentResult {
    /// Create from a path segment.
    pub fn from_segment(segment: &Segment) -> Self {
        Self {
            origin_city: segment.origin_city().to_string(),
            origin_airport: segment.origin_airport().to_string(),
            destination_city: segment.destination_city().to_string(),
            destination_airport: segment.destination_airport().to_string(),
            fare: segment.fare(),
            carrier: segment.carrier().map(str::to_string),
            passengers: segment.passengers(),
            miles: segment.miles(),
        }
    }
}

/// One algorithm's answer, for comparison.
#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmResult {
    pub algorithm: String,
    pub label: String,

    /// Cheapest fare found, absent if no route or the search failed
    pub cost: Option<f64>,

    /// Time taken over all candidate pairings
    pub runtime_ms: f64,

    pub origin_airport: Option<String>,
    pub destination_airport: Option<String>,

    /// Why the search has no answer, if it failed
    pub error: Option<String>,
}

impl AlgorithmResult {
    /// Create from a comparison run.
    pub fn from_run(run: &AlgorithmRun) -> Self {
        let (cost, pair, error) = match &run.outcome {
            Ok(route) if route.is_found() => (Some(route.cost), route.pair, None),
            Ok(_) => (None, None, None),
            Err(e) => (None, None, Some(e.to_string())),
        };

        Self {
            algorithm: run.algorithm.key().to_string(),
            label: run.algorithm.label().to_string(),
            cost,
            runtime_ms: run.runtime.as_nanos() as f64 / 1_000_000.0,
            origin_airport: pair.map(|(origin, _)| origin.to_string()),
            destination_airport: pair.map(|(_, destination)| destination.to_string()),
            error,
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Format dollars with thousands separators, e.g. "$1,234.50".
pub fn format_money(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${}.{:02}", group_thousands(cents / 100), cents % 100)
}

/// Format an optional count to whole units, or "—" when absent.
pub fn format_count(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => {
            let sign = if v <= -0.5 { "-" } else { "" };
            format!("{sign}{}", group_thousands(v.abs().round() as u64))
        }
        _ => "—".to_string(),
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
