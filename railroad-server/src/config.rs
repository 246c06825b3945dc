//! Server configuration.
//!
//! Read from environment variables:
//!
//! - `RAILROAD_NETWORK`: inline network description (default: the sample network)
//! - `RAILROAD_NETWORK_FILE`: file holding the description; takes precedence
//! - `RAILROAD_ADDR`: listen address (default `127.0.0.1:3000`)
//! - `RAILROAD_MAX_QUERY_DEPTH`: largest stop bound a request may ask for (default 30)

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::network::{Graph, GraphError, SAMPLE_NETWORK};
use crate::railroad::{QueryConfig, Railroad};

/// Default listen address.
const DEFAULT_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 3000);

/// Default bound on `max_stops`, `stops` and `max_distance` in requests.
const DEFAULT_MAX_QUERY_DEPTH: usize = 30;

/// Errors loading configuration or the network it names.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The network file could not be read
    #[error("failed to read network file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An environment variable holds an unusable value
    #[error("invalid value {value:?} for {var}: {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },

    /// The network description is malformed
    #[error("invalid network: {0}")]
    Network(#[from] GraphError),
}

/// Where the network description comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkSource {
    Inline(String),
    File(PathBuf),
}

impl Default for NetworkSource {
    fn default() -> Self {
        NetworkSource::Inline(SAMPLE_NETWORK.to_string())
    }
}

/// Configuration for the railroad server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on.
    pub addr: SocketAddr,

    /// Network description source.
    pub network: NetworkSource,

    /// Largest stop or distance bound a single request may ask for.
    /// Enumeration is exponential in this bound.
    pub max_query_depth: usize,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = lookup("RAILROAD_NETWORK_FILE") {
            config.network = NetworkSource::File(path.into());
        } else if let Some(description) = lookup("RAILROAD_NETWORK") {
            config.network = NetworkSource::Inline(description);
        }

        if let Some(addr) = lookup("RAILROAD_ADDR") {
            config.addr = addr.parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::InvalidValue {
                    var: "RAILROAD_ADDR",
                    value: addr.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        if let Some(depth) = lookup("RAILROAD_MAX_QUERY_DEPTH") {
            config.max_query_depth = depth.parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidValue {
                    var: "RAILROAD_MAX_QUERY_DEPTH",
                    value: depth.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        Ok(config)
    }

    /// Set the network source.
    pub fn with_network(mut self, network: NetworkSource) -> Self {
        self.network = network;
        self
    }

    /// Set the request depth bound.
    pub fn with_max_query_depth(mut self, depth: usize) -> Self {
        self.max_query_depth = depth;
        self
    }

    /// Read and build the configured network.
    pub fn load_network(&self) -> Result<Graph, ConfigError> {
        let graph = match &self.network {
            NetworkSource::Inline(description) => Graph::build(description)?,
            NetworkSource::File(path) => {
                let bytes = std::fs::read(path).map_err(|source| ConfigError::Io {
                    path: path.clone(),
                    source,
                })?;
                Graph::build_bytes(&bytes)?
            }
        };
        Ok(graph)
    }

    /// Build the configured network with queries bounded for serving.
    pub fn load_railroad(&self) -> Result<Railroad, ConfigError> {
        let graph = self.load_network()?;
        let config = QueryConfig::default().with_max_search_depth(self.max_query_depth);
        Ok(Railroad::with_config(graph, config))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(DEFAULT_ADDR),
            network: NetworkSource::default(),
            max_query_depth: DEFAULT_MAX_QUERY_DEPTH,
        }
    }
}
