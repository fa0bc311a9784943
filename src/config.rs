//! Application configuration.
//!
//! Settings are read from `config.json` in the platform config directory
//! (`~/.config/shopfront/config.json` on Linux). Missing files and missing
//! fields fall back to defaults; `SHOPFRONT_API_URL` and `SHOPFRONT_CACHE_DIR`
//! override the file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cache;
use crate::error::{Result, ShopfrontError};

/// Config file name
const CONFIG_FILE: &str = "config.json";

pub const DEFAULT_API_BASE_URL: &str = "https://dummyjson.com";
pub const DEFAULT_IMAGE_CONCURRENCY: usize = 8;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the catalog API; the collection lives at `/products`.
    pub api_base_url: String,
    /// Root of the on-disk cache. Defaults to the platform cache directory.
    pub cache_dir: Option<PathBuf>,
    /// Maximum number of image fetches in flight during one listing load.
    pub image_concurrency: usize,
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            cache_dir: None,
            image_concurrency: DEFAULT_IMAGE_CONCURRENCY,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load configuration from the platform config file plus environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = match config_path() {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };
        config.apply_overrides(
            std::env::var("SHOPFRONT_API_URL").ok(),
            std::env::var("SHOPFRONT_CACHE_DIR").ok(),
        );
        Ok(config)
    }

    /// Load configuration from a specific file, defaulting when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        let mut config: Config = serde_json::from_str(&contents)?;
        if config.image_concurrency == 0 {
            config.image_concurrency = 1;
        }
        Ok(config)
    }

    fn apply_overrides(&mut self, api_url: Option<String>, cache_dir: Option<String>) {
        if let Some(url) = api_url.filter(|u| !u.is_empty()) {
            self.api_base_url = url;
        }
        if let Some(dir) = cache_dir.filter(|d| !d.is_empty()) {
            self.cache_dir = Some(PathBuf::from(dir));
        }
    }

    /// Resolve the cache root, preferring the configured directory.
    pub fn cache_root(&self) -> Result<PathBuf> {
        self.cache_dir
            .clone()
            .or_else(cache::cache_dir)
            .ok_or_else(|| ShopfrontError::Other("Could not find cache directory".to_string()))
    }
}

/// Path to the config file (~/.config/shopfront/config.json on Linux).
pub fn config_path() -> Option<PathBuf> {
    cache::project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}
