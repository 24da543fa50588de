//! Application state for the web layer.

use std::sync::Arc;

use crate::network::FareNetwork;
use crate::planner::SearchConfig;

/// Shared application state.
///
/// Everything is read-only after startup, so cloning per request is cheap
/// and handlers never lock.
#[derive(Clone)]
pub struct AppState {
    /// Fare graph, edge metadata and city lookup
    pub network: Arc<FareNetwork>,

    /// Route search configuration
    pub config: Arc<SearchConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: FareNetwork, config: SearchConfig) -> Self {
        Self {
            network: Arc::new(network),
            config: Arc::new(config),
        }
    }
}
