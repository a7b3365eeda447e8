//! Client configuration.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! the base layer; a `config.toml` in the config directory overrides any
//! subset of keys.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [service]
//! base_url = "http://localhost:8080/gallery/"  # Application root of the gallery service
//! cache_bust = true                            # Append a random query parameter to JSON requests
//! cache_bust_param = "dummy"                   # Name of that parameter
//! timeout_secs = 0                             # Request timeout, 0 = none
//!
//! [page]
//! title = "Gallery"       # <title> of rendered page documents
//! stylesheet = ""         # Optional stylesheet href
//! image_base = ""         # Prefix for <img src>; empty keeps links relative
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Client configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Where the gallery service lives and how to talk to it.
    pub service: ServiceConfig,
    /// Rendering options for page documents.
    pub page: PageConfig,
}

impl GalleryConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = Url::parse(&self.service.base_url).map_err(|e| {
            ConfigError::Validation(format!(
                "service.base_url '{}' is not a valid URL: {e}",
                self.service.base_url
            ))
        })?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(ConfigError::Validation(format!(
                "service.base_url must use http or https, got '{}'",
                base.scheme()
            )));
        }
        if self.service.cache_bust && self.service.cache_bust_param.trim().is_empty() {
            return Err(ConfigError::Validation(
                "service.cache_bust_param must not be empty when cache_bust is enabled".into(),
            ));
        }
        Ok(())
    }
}

/// Gallery service connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceConfig {
    /// Application root; endpoints live under `rest/gallery_service/`.
    pub base_url: String,
    /// Append a random query parameter to tag and entry requests.
    pub cache_bust: bool,
    /// Query parameter name used for cache busting.
    pub cache_bust_param: String,
    /// Per-request timeout in seconds. Zero disables the timeout.
    pub timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/gallery/".to_string(),
            cache_bust: true,
            cache_bust_param: "dummy".to_string(),
            timeout_secs: 0,
        }
    }
}

/// Page document settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Document title.
    pub title: String,
    /// Stylesheet href linked from the document head. Empty for none.
    pub stylesheet: String,
    /// Prefix for image `src` attributes. Empty keeps them page-relative.
    pub image_base: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Gallery".to_string(),
            stylesheet: String::new(),
            image_base: String::new(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(GalleryConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key-by-key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the directory has no `config.toml`.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<GalleryConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: GalleryConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in `dir`, on top of stock defaults.
pub fn load_config(dir: &Path) -> Result<GalleryConfig, ConfigError> {
    resolve_config(stock_defaults_value(), load_raw_config(dir)?)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# tag-gallery configuration
# =========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys cause an error.

# ---------------------------------------------------------------------------
# Gallery service
# ---------------------------------------------------------------------------
[service]
# Application root. Endpoints are resolved below rest/gallery_service/.
base_url = "http://localhost:8080/gallery/"

# Append a random query parameter to tag and entry requests so that
# intermediary caches never answer them.
cache_bust = true
cache_bust_param = "dummy"

# Per-request timeout in seconds. 0 waits forever.
timeout_secs = 0

# ---------------------------------------------------------------------------
# Rendered page documents
# ---------------------------------------------------------------------------
[page]
title = "Gallery"

# Stylesheet linked from the document head, e.g. a CSS framework CDN URL.
stylesheet = ""

# Prefix for <img src> attributes. Leave empty when the page is served by
# the gallery application itself, so links stay relative.
image_base = ""
"##
}
