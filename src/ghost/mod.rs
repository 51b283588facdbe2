//! Ghost Content API - client and resource models

mod client;
mod models;

pub use client::{BrowseParams, ContentApi};
pub use models::{ApiErrorDetail, Author, ErrorResponse, Post, PostsResponse, Tag, Visibility};
