//! Configuration for the Rampart core.
//!
//! Runtime-configurable settings persisted to disk as RON, with CLI
//! overrides via clap and hot-reload change detection.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, GameConfig, NetworkConfig, default_config_dir};
pub use error::ConfigError;
