//! Helper functions for rewriting image URLs

mod url;

pub use url::*;
