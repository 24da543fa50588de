use fare_server::config::ServerConfig;
use fare_server::dataset::load_routes;
use fare_server::network::FareNetwork;
use fare_server::web::{AppState, create_router};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env().expect("Invalid configuration");

    // Load the dataset once; every request shares the same network
    let loaded = load_routes(&config.dataset_path).expect("Failed to load fare dataset");
    if loaded.records.is_empty() {
        warn!(path = %config.dataset_path.display(), "Fare dataset has no usable rows");
    }
    let network = FareNetwork::from_records(&loaded.records);

    // Build app state
    let state = AppState::new(network, config.search.clone());

    // Create router
    let app = create_router(state, &config.static_dir);

    // Bind and serve
    let addr = config.addr;
    info!(%addr, algorithm = config.search.default_algorithm.key(), "Cheapest fare finder listening");
    info!("  GET  /health         - Health check");
    info!("  GET  /api/airports   - Airports in the fare graph");
    info!("  GET  /api/cities     - Cities and their airports");
    info!("  GET  /api/route      - Cheapest route between airports or cities");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app).await.expect("Server error");
}
