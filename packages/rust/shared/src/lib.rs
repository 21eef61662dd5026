//! Shared types, error model, and configuration for the portfolio pipeline.
//!
//! This crate is the foundation depended on by all other portfolio crates.
//! It provides:
//! - [`PortfolioError`], the unified error type
//! - Domain types ([`ContentRecord`], slug rules)
//! - Configuration ([`AppConfig`], [`PipelineConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, CONFIG_FILE_NAME, CatalogConfig, ContentConfig, ExportConfig, ExportFormat,
    InvalidContentPolicy, NotFoundConfig, PipelineConfig, config_file_path, init_config,
    load_config, load_config_from,
};
pub use error::{PortfolioError, Result};
pub use types::{
    ContentRecord, NOT_FOUND_SLUG, SUPPLEMENTARY_IMAGE_SLOTS, validate_slug,
};
