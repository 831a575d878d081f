//! Shared configuration and domain types for the chanpulse importer.

use thiserror::Error;

pub mod app_config;
pub mod config;
pub mod types;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use types::{
    AccountResult, ChannelProfile, ContentItem, ContentStats, ImportWindow, Platform, RunSummary,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env var: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
    #[error("invalid import window: {0}")]
    InvalidWindow(String),
}
