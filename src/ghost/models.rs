//! Content API resources

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Post visibility as reported by the Content API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Members,
    Paid,
    /// Any tier-specific or future visibility value
    #[serde(other)]
    Other,
}

/// A tag attached to a post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,

    #[serde(default)]
    pub slug: Option<String>,
}

/// An author attached to a post
///
/// Authors are kept as a raw JSON object so every field reaches the
/// front-matter untouched and in the order the API sent it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Author(pub Map<String, Value>);

impl Author {
    /// The author's display name
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    /// The avatar URL, if the author has one
    pub fn profile_image(&self) -> Option<&str> {
        self.0.get("profile_image").and_then(Value::as_str)
    }

    /// Replace the avatar URL in place, keeping the key's position
    pub fn set_profile_image(&mut self, url: String) {
        if let Some(slot) = self.0.get_mut("profile_image") {
            *slot = Value::String(url);
        } else {
            self.0.insert("profile_image".to_string(), Value::String(url));
        }
    }
}

/// A published post with tags and authors expanded
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Post {
    pub id: Option<String>,
    pub title: String,
    pub slug: String,
    pub html: Option<String>,
    pub excerpt: Option<String>,

    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub og_image: Option<String>,
    pub canonical_url: Option<String>,

    pub feature_image: Option<String>,
    pub featured: bool,
    pub visibility: Visibility,

    pub published_at: Option<String>,
    pub updated_at: Option<String>,

    pub tags: Vec<Tag>,
    pub authors: Vec<Author>,
}

/// Envelope returned by `GET /posts/`
#[derive(Debug, Clone, Deserialize)]
pub struct PostsResponse {
    pub posts: Vec<Post>,

    #[serde(default)]
    pub meta: Option<Value>,
}

/// Envelope returned by the API on failure
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub errors: Vec<ApiErrorDetail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,

    #[serde(default, rename = "type")]
    pub kind: Option<String>,

    #[serde(default)]
    pub context: Option<String>,
}

impl ErrorResponse {
    /// Join all error messages into one line
    pub fn summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| match (&e.kind, &e.context) {
                (Some(kind), Some(ctx)) => format!("{}: {} ({})", kind, e.message, ctx),
                (Some(kind), None) => format!("{}: {}", kind, e.message),
                _ => e.message.clone(),
            })
            .collect::<Vec<_>>()
            .join("; ")
    }
}
