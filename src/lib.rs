//! ghost-md: export Ghost posts as Markdown for static site generators
//!
//! Posts are fetched from the Ghost Content API with their tags and authors,
//! projected onto Hugo-style YAML front-matter and written one file per slug.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod ghost;
pub mod helpers;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Name of the optional configuration file in the base directory
pub const CONFIG_FILE: &str = "ghost-md.yml";

/// The main application
#[derive(Debug, Clone)]
pub struct GhostMd {
    /// Exporter configuration
    pub config: config::ExportConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory the Markdown files are written to
    pub output_dir: PathBuf,
}

impl GhostMd {
    /// Create an instance from a directory, reading ghost-md.yml and the environment
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let config = Self::load_config(base_dir.as_ref())?;
        Ok(Self::with_config(base_dir, config))
    }

    /// Create an instance from an already resolved configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::ExportConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let output_dir = base_dir.join(&config.output_dir);

        Self {
            config,
            base_dir,
            output_dir,
        }
    }

    /// Read ghost-md.yml (when present) and overlay the environment
    pub fn load_config(base_dir: &Path) -> Result<config::ExportConfig> {
        let config_path = base_dir.join(CONFIG_FILE);

        let mut config = if config_path.exists() {
            tracing::debug!("Loading config from {:?}", config_path);
            config::ExportConfig::load(&config_path)?
        } else {
            config::ExportConfig::default()
        };
        config.apply_env();

        Ok(config)
    }

    /// Export all posts to Markdown
    pub async fn export(&self) -> Result<()> {
        commands::export::run(self).await
    }

    /// List the posts available for export
    pub async fn list(&self) -> Result<()> {
        commands::list::run(self).await
    }
}
