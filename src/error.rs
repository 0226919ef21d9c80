//! Error types for the donation graph engine.

use std::path::PathBuf;

/// Business-level failures returned by engine operations.
///
/// None of these abort the caller: an operation that fails leaves the
/// graph exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Node limit reached: at most {limit} nodes can be registered")]
    CapacityExceeded { limit: usize },
}

/// Failures while loading `donorgraph.toml`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, GraphError>;
