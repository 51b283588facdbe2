//! List posts available from the Content API

use anyhow::Result;
use chrono::DateTime;
use std::collections::HashMap;

use crate::ghost::{BrowseParams, ContentApi, Post, Visibility};
use crate::GhostMd;

/// Print every post the exporter would see, plus tag counts
pub async fn run(ghost: &GhostMd) -> Result<()> {
    let api = ContentApi::from_config(&ghost.config)?;
    let posts = api.browse_posts(&BrowseParams::all_posts()).await?;

    println!("Posts ({}):", posts.len());
    for post in &posts {
        println!("  {}", post_line(post));
    }

    let tags = tag_counts(&posts);
    println!("Tags ({}):", tags.len());
    for (tag, count) in tags {
        println!("  {} ({})", tag, count);
    }

    Ok(())
}

/// One summary line: `date - title [slug]` with export notes
fn post_line(post: &Post) -> String {
    let date = post
        .published_at
        .as_deref()
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "----------".to_string());

    let mut line = format!("{} - {} [{}]", date, post.title, post.slug);
    if post.visibility != Visibility::Public {
        line.push_str(" (draft)");
    }
    if post.authors.is_empty() {
        line.push_str(" (no author, skipped)");
    }
    line
}

/// Tags by number of posts, most used first
fn tag_counts(posts: &[Post]) -> Vec<(String, usize)> {
    let mut tags: HashMap<String, usize> = HashMap::new();
    for post in posts {
        for tag in &post.tags {
            *tags.entry(tag.name.clone()).or_insert(0) += 1;
        }
    }
    let mut tags: Vec<_> = tags.into_iter().collect();
    tags.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    tags
}
