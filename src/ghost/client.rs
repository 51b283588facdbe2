//! Typed HTTP client for the Ghost Content API

use reqwest::StatusCode;

use super::models::{ErrorResponse, Post, PostsResponse};
use crate::config::ExportConfig;
use crate::error::{GhostError, Result};

/// Query options for browsing posts
#[derive(Debug, Clone)]
pub struct BrowseParams {
    pub limit: String,
    pub include: Vec<String>,
    pub formats: Vec<String>,
}

impl BrowseParams {
    /// Every post, with tags and authors embedded and HTML bodies
    pub fn all_posts() -> Self {
        Self {
            limit: "all".to_string(),
            include: vec!["tags".to_string(), "authors".to_string()],
            formats: vec!["html".to_string()],
        }
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![("limit", self.limit.clone())];
        if !self.include.is_empty() {
            query.push(("include", self.include.join(",")));
        }
        if !self.formats.is_empty() {
            query.push(("formats", self.formats.join(",")));
        }
        query
    }
}

/// Read-only client for one Ghost site
#[derive(Debug, Clone)]
pub struct ContentApi {
    base_url: String,
    key: String,
    version: String,
    client: reqwest::Client,
}

impl ContentApi {
    /// Create a client for the given site URL, key and API version
    pub fn new(url: &str, key: &str, version: &str) -> Result<Self> {
        let base_url = url.trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(GhostError::InvalidUrl(url.to_string()));
        }

        let client = reqwest::Client::builder()
            .user_agent(concat!("ghost-md/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            base_url,
            key: key.to_string(),
            version: version.to_string(),
            client,
        })
    }

    /// Create a client from the exporter configuration
    pub fn from_config(config: &ExportConfig) -> Result<Self> {
        Self::new(config.ghost_url()?, config.ghost_key()?, &config.api_version)
    }

    /// URL of a Content API resource, e.g. `posts`
    pub fn endpoint(&self, resource: &str) -> String {
        format!(
            "{}/ghost/api/{}/content/{}/",
            self.base_url,
            self.version,
            resource.trim_matches('/')
        )
    }

    /// Browse posts
    pub async fn browse_posts(&self, params: &BrowseParams) -> Result<Vec<Post>> {
        let url = self.endpoint("posts");
        tracing::debug!("GET {} ({:?})", url, params);

        let resp = self
            .client
            .get(&url)
            .header("Accept-Version", &self.version)
            .query(&[("key", self.key.as_str())])
            .query(&params.query())
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(api_error(status, &body));
        }

        let body: PostsResponse = resp.json().await?;
        tracing::debug!("Content API returned {} posts", body.posts.len());
        Ok(body.posts)
    }
}

fn api_error(status: StatusCode, body: &str) -> GhostError {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .map(|e| e.summary())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| body.trim().to_string());

    GhostError::Api {
        status: status.as_u16(),
        message,
    }
}
