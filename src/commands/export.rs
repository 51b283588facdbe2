//! Export posts from the Content API to Markdown files

use anyhow::{anyhow, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::content::{Document, FrontMatterOptions};
use crate::ghost::{BrowseParams, ContentApi};
use crate::GhostMd;

/// Settings for one export run
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub output_dir: PathBuf,
    pub site_url: String,
    pub language: String,
    pub image_size: String,
    /// Cap on concurrent writes; `None` launches every write at once
    pub jobs: Option<usize>,
}

impl ExportOptions {
    pub fn from_ghost(ghost: &GhostMd) -> Self {
        Self {
            output_dir: ghost.output_dir.clone(),
            site_url: ghost.config.site_url().to_string(),
            language: ghost.config.language.clone(),
            image_size: ghost.config.image_size.clone(),
            jobs: ghost.config.jobs,
        }
    }

    fn front_matter(&self) -> FrontMatterOptions<'_> {
        FrontMatterOptions {
            site_url: &self.site_url,
            language: &self.language,
            image_size: &self.image_size,
        }
    }
}

/// Outcome counts of an export
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub written: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl fmt::Display for ExportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} written, {} skipped, {} failed",
            self.written, self.skipped, self.failed
        )
    }
}

/// Fetches every post and writes one Markdown file per post
pub struct PostExporter {
    api: ContentApi,
    options: ExportOptions,
}

impl PostExporter {
    pub fn new(api: ContentApi, options: ExportOptions) -> Self {
        Self { api, options }
    }

    /// Export everything, logging the outcome instead of returning it
    pub async fn run(&self) {
        let start = Instant::now();

        match self.export().await {
            Ok(summary) => {
                tracing::info!(
                    "All posts converted to Markdown in {:.2}s ({})",
                    start.elapsed().as_secs_f64(),
                    summary
                );
            }
            Err(e) => {
                tracing::error!("Export failed: {:#}", e);
            }
        }
    }

    /// Fetch all posts, then transform and write them concurrently
    ///
    /// A fetch failure returns before anything is written. A failed write
    /// does not stop the others; the first failure is returned once every
    /// write has finished.
    pub async fn export(&self) -> Result<ExportSummary> {
        let posts = self.api.browse_posts(&BrowseParams::all_posts()).await?;
        tracing::info!("Fetched {} posts", posts.len());

        tokio::fs::create_dir_all(&self.options.output_dir).await?;

        let limiter = self.options.jobs.map(|n| Arc::new(Semaphore::new(n.max(1))));
        let opts = self.options.front_matter();
        let mut summary = ExportSummary::default();
        let mut tasks = JoinSet::new();

        for post in &posts {
            let Some(doc) = Document::from_post(post, &opts) else {
                tracing::debug!("Skipping {}: post has no authors", post.slug);
                summary.skipped += 1;
                continue;
            };

            let output_dir = self.options.output_dir.clone();
            let limiter = limiter.clone();

            tasks.spawn(async move {
                let _permit = match limiter {
                    Some(sem) => sem.acquire_owned().await.ok(),
                    None => None,
                };
                write_document(&doc, &output_dir)
                    .await
                    .map_err(|e| anyhow!("{}: {}", doc.slug(), e))
            });
        }

        let mut first_error = None;
        while let Some(joined) = tasks.join_next().await {
            match joined.map_err(anyhow::Error::from).and_then(|r| r) {
                Ok(path) => {
                    tracing::debug!("Wrote {:?}", path);
                    summary.written += 1;
                }
                Err(e) => {
                    tracing::debug!("Post failed: {}", e);
                    summary.failed += 1;
                    first_error.get_or_insert(e);
                }
            }
        }

        match first_error {
            Some(e) => Err(e.context(format!(
                "{} of {} posts could not be written",
                summary.failed,
                summary.written + summary.failed
            ))),
            None => Ok(summary),
        }
    }
}

/// Render a document and write it, replacing any existing file
async fn write_document(doc: &Document, output_dir: &Path) -> crate::error::Result<PathBuf> {
    let path = doc.path_in(output_dir)?;
    let content = doc.render()?;
    tokio::fs::write(&path, content).await?;
    Ok(path)
}

/// Run the export command
pub async fn run(ghost: &GhostMd) -> Result<()> {
    let api = ContentApi::from_config(&ghost.config)?;
    let exporter = PostExporter::new(api, ExportOptions::from_ghost(ghost));
    exporter.run().await;
    Ok(())
}
