//! HTTP route handlers.

use std::path::Path;

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeDir;
use tracing::{debug, error, info};

use crate::domain::AirportCode;
use crate::network::FareNetwork;
use crate::planner::{
    Algorithm, Endpoint, MissingEdge, QueryError, RouteQuery, SearchConfig, SolveError, compare,
};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Shown when no airport pairing has a route.
const NO_ROUTE_MESSAGE: &str =
    "No route could be found with the selected parameters. Try different airports or cities.";

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/airports", get(list_airports))
        .route("/api/cities", get(list_cities))
        .route("/api/route", get(plan_route))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with search form.
async fn index_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let template = IndexTemplate {
        airports: state.network.airports().map(ToString::to_string).collect(),
        cities: state.network.cities().cities().map(str::to_string).collect(),
        algorithms: AlgorithmOption::all(state.config.default_algorithm),
    };

    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;

    Ok(Html(html))
}

/// All airports in the fare graph, sorted.
async fn list_airports(State(state): State<AppState>) -> Json<AirportListResponse> {
    let airports = state.network.airports().map(ToString::to_string).collect();

    Json(AirportListResponse { airports })
}

/// All cities with their airports, sorted by name.
async fn list_cities(State(state): State<AppState>) -> Json<CityListResponse> {
    let cities = state
        .network
        .cities()
        .iter()
        .map(|(name, airports)| CityResult {
            name: name.to_string(),
            airports: airports.iter().map(ToString::to_string).collect(),
        })
        .collect();

    Json(CityListResponse { cities })
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Find the cheapest route for a request.
async fn plan_route(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<RouteRequest>,
) -> Result<Response, AppError> {
    let query = build_query(&req)?;

    let algorithm = match req.algorithm.as_deref().filter(|a| !a.trim().is_empty()) {
        Some(key) => key.parse::<Algorithm>().map_err(|e| AppError::BadRequest {
            message: e.to_string(),
        })?,
        None => state.config.default_algorithm,
    };

    debug!(?query, algorithm = algorithm.key(), "Planning route");

    // Searching is CPU-bound; keep it off the async workers
    let network = state.network.clone();
    let config = state.config.clone();
    let route = tokio::task::spawn_blocking(move || plan(&network, &query, algorithm, &config))
        .await
        .map_err(|e| AppError::Internal {
            message: format!("Route search task failed: {e}"),
        })??;

    info!(
        origin = %route.origin_airport,
        destination = %route.destination_airport,
        fare = route.total_fare,
        hops = route.segments.len(),
        "Route found"
    );

    // Return HTML or JSON based on Accept header
    if accepts_html(&headers) {
        let template = RouteResultsTemplate::from_response(&route);
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        Ok(Json(route).into_response())
    }
}

/// Turn request parameters into a route query.
fn build_query(req: &RouteRequest) -> Result<RouteQuery, AppError> {
    match req.mode {
        SearchMode::Airport => Ok(RouteQuery::airports(
            parse_airport("origin", &req.origin)?,
            parse_airport("destination", &req.destination)?,
        )),
        SearchMode::City => {
            let origin = city_endpoint("origin", &req.origin, req.origin_airport.as_deref())?;
            let destination = city_endpoint(
                "destination",
                &req.destination,
                req.destination_airport.as_deref(),
            )?;

            Ok(RouteQuery {
                origin,
                destination,
                auto_select: req.auto_select.unwrap_or(true),
            })
        }
    }
}

fn parse_airport(field: &str, value: &str) -> Result<AirportCode, AppError> {
    AirportCode::parse_normalized(value).map_err(|e| AppError::BadRequest {
        message: format!("Invalid {field} airport code {value:?}: {e}"),
    })
}

fn city_endpoint(field: &str, name: &str, airport: Option<&str>) -> Result<Endpoint, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest {
            message: format!("Missing {field} city"),
        });
    }

    let airport = airport
        .filter(|a| !a.trim().is_empty())
        .map(|a| parse_airport(field, a))
        .transpose()?;

    Ok(Endpoint::City {
        name: name.to_string(),
        airport,
    })
}

/// Run every algorithm on `query` and present `algorithm`'s answer.
fn plan(
    network: &FareNetwork,
    query: &RouteQuery,
    algorithm: Algorithm,
    config: &SearchConfig,
) -> Result<RouteResponse, AppError> {
    let comparison = compare(network, query, config)?;

    let run = comparison
        .run_for(algorithm)
        .ok_or_else(|| AppError::Internal {
            message: format!("No result for {}", algorithm.label()),
        })?;
    let route = run.outcome.as_ref().map_err(|e| AppError::from(e.clone()))?;

    let Some((origin, destination)) = route.pair.filter(|_| route.is_found()) else {
        return Err(AppError::NotFound {
            message: NO_ROUTE_MESSAGE.to_string(),
        });
    };

    let segments = network.summarize(&route.path)?;

    Ok(RouteResponse {
        origin: query.origin.label(Some(&origin)),
        destination: query.destination.label(Some(&destination)),
        origin_airport: origin.to_string(),
        destination_airport: destination.to_string(),
        algorithm: algorithm.key().to_string(),
        algorithm_label: algorithm.label().to_string(),
        total_fare: route.cost,
        path: route.path.iter().map(ToString::to_string).collect(),
        segments: segments.iter().map(SegmentResult::from_segment).collect(),
        comparison: comparison.runs.iter().map(AlgorithmResult::from_run).collect(),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<QueryError> for AppError {
    fn from(e: QueryError) -> Self {
        match e {
            QueryError::UnknownAirport(_) | QueryError::UnknownCity(_) => AppError::NotFound {
                message: e.to_string(),
            },
            QueryError::AirportNotInCity { .. } | QueryError::SameAirport(_) => {
                AppError::BadRequest {
                    message: e.to_string(),
                }
            }
        }
    }
}

impl From<SolveError> for AppError {
    fn from(e: SolveError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl From<MissingEdge> for AppError {
    fn from(e: MissingEdge) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "Request failed");
        } else {
            debug!(%status, %message, "Request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
