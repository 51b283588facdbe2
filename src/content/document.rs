//! Markdown documents produced from posts

use std::path::{Path, PathBuf};

use super::frontmatter::{FrontMatter, FrontMatterOptions};
use crate::error::{GhostError, Result};
use crate::ghost::Post;

/// A post ready to be written: front-matter plus the HTML body
#[derive(Debug, Clone)]
pub struct Document {
    pub front_matter: FrontMatter,
    pub body: String,
}

impl Document {
    /// Build the document for a post, or `None` if the post has no authors
    pub fn from_post(post: &Post, opts: &FrontMatterOptions<'_>) -> Option<Self> {
        let front_matter = FrontMatter::from_post(post, opts)?;
        Some(Self {
            front_matter,
            body: post.html.clone().unwrap_or_default(),
        })
    }

    pub fn slug(&self) -> &str {
        &self.front_matter.slug
    }

    /// Target path inside `output_dir`
    pub fn path_in(&self, output_dir: &Path) -> Result<PathBuf> {
        let slug = self.slug();
        if slug.is_empty()
            || slug == "."
            || slug == ".."
            || slug.contains(['/', '\\'])
        {
            return Err(GhostError::InvalidSlug(slug.to_string()));
        }
        Ok(output_dir.join(format!("{}.md", slug)))
    }

    /// Render as `---\n<yaml>\n---\n<html>\n`
    pub fn render(&self) -> Result<String> {
        let yaml = self.front_matter.to_yaml()?;
        Ok(format!("---\n{}\n---\n{}\n", yaml, self.body))
    }
}
