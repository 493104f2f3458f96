// crates/domain/src/config.rs

//! Site settings.
//!
//! Loaded once at startup by the edge CLI and passed down explicitly; no
//! module reads environment state at call sites.

use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub site: SiteConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Public origin used for sitemap URLs, no trailing slash.
    pub base_url: String,
    pub title: String,
}

/// Content-store connection parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    pub project_id: String,
    #[serde(default = "default_dataset")]
    pub dataset: String,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default)]
    pub use_cdn: bool,
    /// Directory of exported store documents served by the edge layer.
    pub content_dir: PathBuf,
}

fn default_dataset() -> String {
    "production".to_owned()
}

fn default_api_version() -> String {
    "2024-01-01".to_owned()
}
