//! Error types shared by the API client and the exporter

use thiserror::Error;

/// Errors raised while fetching, transforming or writing posts
#[derive(Error, Debug)]
pub enum GhostError {
    #[error("Missing configuration value: {0} (set it in ghost-md.yml or the environment)")]
    MissingConfig(&'static str),

    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Content API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Invalid slug {0:?}: slugs must not contain path separators")]
    InvalidSlug(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GhostError>;
