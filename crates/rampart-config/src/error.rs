//! Configuration error types.

use std::path::PathBuf;

/// Errors raised while loading or persisting configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The config file or its directory could not be written.
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The config file exists but is not valid RON.
    #[error("malformed config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },

    /// The in-memory config failed to serialize.
    #[error("could not serialize config: {0}")]
    Serialize(#[source] ron::Error),
}
