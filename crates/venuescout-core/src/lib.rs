//! Core domain model for venuescout.
//!
//! Defines the normalized [`Place`] record shared by the provider, vision,
//! and CLI crates, the pure label/type filter engine, and application
//! configuration loaded from environment variables.

use thiserror::Error;

pub mod app_config;
pub mod config;
pub mod filter;
pub mod place;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use filter::{filter_places, FilterState};
pub use place::{
    Coordinates, EnrichmentRecord, PhotoRef, Place, PlaceDetails, PlaceReview, PriceLevel,
    SearchRequest, SearchResult, SearchStatus,
};

/// Errors produced while loading application configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
