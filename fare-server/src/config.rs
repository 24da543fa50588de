//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::planner::{Algorithm, SearchConfig, UnknownAlgorithm};

/// Path of the fare CSV.
pub const DATASET_VAR: &str = "FARES_DATASET";
/// Listen address, e.g. `0.0.0.0:8080`.
pub const ADDR_VAR: &str = "FARES_ADDR";
/// Directory served under `/static`.
pub const STATIC_DIR_VAR: &str = "FARES_STATIC_DIR";
/// Algorithm presented when a request names none.
pub const ALGORITHM_VAR: &str = "FARES_ALGORITHM";
/// `true`/`false`: solve candidate pairings in parallel.
pub const PARALLEL_VAR: &str = "FARES_PARALLEL";

const DEFAULT_DATASET: &str = "Aviation.csv";
const DEFAULT_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_STATIC_DIR: &str = "static";

/// Errors from reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var}: invalid socket address {value:?}: {source}")]
    Addr {
        var: &'static str,
        value: String,
        source: std::net::AddrParseError,
    },

    #[error("{var}: {source}")]
    Algorithm {
        var: &'static str,
        source: UnknownAlgorithm,
    },

    #[error("{var}: expected true or false, got {value:?}")]
    Flag { var: &'static str, value: String },
}

/// Everything the server binary needs to start.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub dataset_path: PathBuf,
    pub addr: SocketAddr,
    pub static_dir: PathBuf,
    pub search: SearchConfig,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, which returns a variable's value
    /// if it is set. Unset and blank variables take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let dataset_path = get(DATASET_VAR).unwrap_or_else(|| DEFAULT_DATASET.to_string());
        let static_dir = get(STATIC_DIR_VAR).unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string());

        let addr_value = get(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_value.parse().map_err(|source| ConfigError::Addr {
            var: ADDR_VAR,
            value: addr_value.clone(),
            source,
        })?;

        let mut search = SearchConfig::default();
        if let Some(value) = get(ALGORITHM_VAR) {
            search.default_algorithm = value
                .parse::<Algorithm>()
                .map_err(|source| ConfigError::Algorithm {
                    var: ALGORITHM_VAR,
                    source,
                })?;
        }
        if let Some(value) = get(PARALLEL_VAR) {
            search.parallel = parse_flag(PARALLEL_VAR, &value)?;
        }

        Ok(Self {
            dataset_path: PathBuf::from(dataset_path),
            addr,
            static_dir: PathBuf::from(static_dir),
            search,
        })
    }
}

fn parse_flag(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Flag {
            var,
            value: value.to_string(),
        }),
    }
}
