//! Exporter configuration (ghost-md.yml + environment)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{self, GhostError};

/// Environment variable holding the Ghost site URL
pub const ENV_GHOST_URL: &str = "GHOST_URL";
/// Environment variable holding the Content API key
pub const ENV_GHOST_KEY: &str = "GHOST_KEY";
/// Environment variable overriding the Content API version
pub const ENV_GHOST_VERSION: &str = "GHOST_VERSION";
/// Environment variable holding the public base URL used for images
pub const ENV_SITE_URL: &str = "SITE_URL";

/// Main exporter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    // Content API
    pub ghost_url: Option<String>,
    pub ghost_key: Option<String>,
    pub api_version: String,

    // Output
    pub site_url: Option<String>,
    pub output_dir: String,
    pub language: String,
    pub image_size: String,

    /// Maximum number of posts written at once (unbounded when unset)
    pub jobs: Option<usize>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            ghost_url: None,
            ghost_key: None,
            api_version: "v3".to_string(),

            site_url: None,
            output_dir: "content/posts".to_string(),
            language: "en".to_string(),
            image_size: "w100".to_string(),

            jobs: None,
        }
    }
}

impl ExportConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: ExportConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Overlay values taken from the process environment
    pub fn apply_env(&mut self) {
        self.apply_vars(|key| std::env::var(key).ok());
    }

    /// Overlay values from an arbitrary key lookup; empty values are ignored
    pub fn apply_vars<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = get(ENV_GHOST_URL) {
            self.ghost_url = Some(url);
        }
        if let Some(key) = get(ENV_GHOST_KEY) {
            self.ghost_key = Some(key);
        }
        if let Some(version) = get(ENV_GHOST_VERSION) {
            self.api_version = version;
        }
        if let Some(site) = get(ENV_SITE_URL) {
            self.site_url = Some(site);
        }
    }

    /// The Ghost site URL, required to reach the Content API
    pub fn ghost_url(&self) -> error::Result<&str> {
        self.ghost_url
            .as_deref()
            .ok_or(GhostError::MissingConfig(ENV_GHOST_URL))
    }

    /// The Content API key
    pub fn ghost_key(&self) -> error::Result<&str> {
        self.ghost_key
            .as_deref()
            .ok_or(GhostError::MissingConfig(ENV_GHOST_KEY))
    }

    /// Base URL prepended to relative images, falling back to the Ghost URL
    pub fn site_url(&self) -> &str {
        self.site_url
            .as_deref()
            .or(self.ghost_url.as_deref())
            .unwrap_or_default()
    }
}
