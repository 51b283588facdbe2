//! Content module - turns Ghost posts into Markdown documents

mod document;
mod frontmatter;

pub use document::Document;
pub use frontmatter::{FrontMatter, FrontMatterOptions};
