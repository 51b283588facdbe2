//! Front-matter projection of a Ghost post

use serde::Serialize;

use crate::ghost::{Author, Post, Visibility};
use crate::helpers::{absolute_url, sized_image};

/// Settings that shape the projection but are not part of the post
#[derive(Debug, Clone, Copy)]
pub struct FrontMatterOptions<'a> {
    /// Base URL prepended to relative Open Graph images
    pub site_url: &'a str,
    /// Value written to `i18nlanguage`
    pub language: &'a str,
    /// Ghost image size variant used for author avatars, e.g. `w100`
    pub image_size: &'a str,
}

/// Front-matter written at the top of every exported post
///
/// Field order here is the key order in the emitted YAML.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrontMatter {
    pub title: String,
    pub description: Option<String>,
    pub pagetitle: String,
    pub slug: String,
    pub feature_image: Option<String>,
    pub lastmod: Option<String>,
    pub date: Option<String>,
    pub summary: Option<String>,
    pub i18nlanguage: String,
    pub weight: u8,
    pub draft: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_description: Option<String>,
    pub og_image: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    pub authors: Vec<Author>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
}

impl FrontMatter {
    /// Build the front-matter for a post
    ///
    /// Returns `None` for posts without any author; those are not exported.
    pub fn from_post(post: &Post, opts: &FrontMatterOptions<'_>) -> Option<Self> {
        if post.authors.is_empty() {
            return None;
        }

        let og_image = non_empty(&post.og_image)
            .or_else(|| non_empty(&post.feature_image))
            .unwrap_or_default();

        let authors = post
            .authors
            .iter()
            .map(|author| resize_avatar(author, opts.image_size))
            .collect();

        Some(Self {
            title: non_empty(&post.meta_title).unwrap_or_else(|| post.title.clone()),
            description: non_empty(&post.meta_description).or_else(|| post.excerpt.clone()),
            pagetitle: post.title.clone(),
            slug: post.slug.clone(),
            feature_image: post.feature_image.clone(),
            lastmod: post.updated_at.clone(),
            date: post.published_at.clone(),
            summary: post.excerpt.clone(),
            i18nlanguage: opts.language.to_string(),
            weight: if post.featured { 1 } else { 0 },
            draft: post.visibility != Visibility::Public,
            og_title: non_empty(&post.og_title),
            og_description: non_empty(&post.og_description),
            og_image: absolute_url(opts.site_url, &og_image),
            categories: post.tags.iter().map(|t| t.name.clone()).collect(),
            authors,
            canonical: non_empty(&post.canonical_url),
        })
    }

    /// Serialize to YAML (without the `---` fences)
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

/// Swap an author's avatar for the smaller size variant
fn resize_avatar(author: &Author, size: &str) -> Author {
    let mut author = author.clone();
    if let Some(url) = author.profile_image().map(|url| sized_image(url, size)) {
        author.set_profile_image(url);
    }
    author
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ghost::Tag;

    const OPTS: FrontMatterOptions<'static> = FrontMatterOptions {
        site_url: "https://blog.example.com",
        language: "en",
        image_size: "w100",
    };

    fn author(profile_image: &str) -> Author {
        serde_json::from_value(serde_json::json!({
            "id": "1",
            "name": "Ann",
            "profile_image": profile_image,
            "website": null,
        }))
        .unwrap()
    }

    fn hello_world() -> Post {
        Post {
            title: "Hello".to_string(),
            slug: "hello-world".to_string(),
            excerpt: Some("intro".to_string()),
            tags: vec![Tag {
                name: "news".to_string(),
                slug: None,
            }],
            authors: vec![author("content/images/2020/a.jpg")],
            ..Default::default()
        }
    }

    #[test]
    fn test_hello_world() {
        let fm = FrontMatter::from_post(&hello_world(), &OPTS).unwrap();
        assert_eq!(fm.title, "Hello");
        assert_eq!(fm.description.as_deref(), Some("intro"));
        assert_eq!(fm.summary.as_deref(), Some("intro"));
        assert_eq!(fm.pagetitle, "Hello");
        assert!(!fm.draft);
        assert_eq!(fm.weight, 0);
        assert_eq!(fm.categories, vec!["news"]);
        assert_eq!(
            fm.authors[0].profile_image(),
            Some("content/images/size/w100/2020/a.jpg")
        );
        assert!(fm.canonical.is_none());
    }

    #[test]
    fn test_meta_fields_win_when_set() {
        let mut post = hello_world();
        post.meta_title = Some("SEO Hello".to_string());
        post.meta_description = Some("seo intro".to_string());

        let fm = FrontMatter::from_post(&post, &OPTS).unwrap();
        assert_eq!(fm.title, "SEO Hello");
        assert_eq!(fm.pagetitle, "Hello");
        assert_eq!(fm.description.as_deref(), Some("seo intro"));
    }

    #[test]
    fn test_empty_meta_fields_fall_back() {
        let mut post = hello_world();
        post.meta_title = Some(String::new());
        post.meta_description = Some(String::new());

        let fm = FrontMatter::from_post(&post, &OPTS).unwrap();
        assert_eq!(fm.title, "Hello");
        assert_eq!(fm.description.as_deref(), Some("intro"));
    }

    #[test]
    fn test_draft_follows_visibility() {
        for (visibility, draft) in [
            (Visibility::Public, false),
            (Visibility::Members, true),
            (Visibility::Paid, true),
            (Visibility::Other, true),
        ] {
            let post = Post {
                visibility,
                ..hello_world()
            };
            let fm = FrontMatter::from_post(&post, &OPTS).unwrap();
            assert_eq!(fm.draft, draft, "visibility {:?}", visibility);
        }
    }

    #[test]
    fn test_featured_weight() {
        let post = Post {
            featured: true,
            ..hello_world()
        };
        assert_eq!(FrontMatter::from_post(&post, &OPTS).unwrap().weight, 1);
    }

    #[test]
    fn test_og_image_prefixed_once() {
        let mut post = hello_world();
        post.og_image = Some("/content/images/2020/04/social.jpg".to_string());
        let fm = FrontMatter::from_post(&post, &OPTS).unwrap();
        assert_eq!(
            fm.og_image,
            "https://blog.example.com/content/images/2020/04/social.jpg"
        );

        post.og_image = Some("https://blog.example.com/content/images/b.jpg".to_string());
        let fm = FrontMatter::from_post(&post, &OPTS).unwrap();
        assert_eq!(fm.og_image, "https://blog.example.com/content/images/b.jpg");
    }

    #[test]
    fn test_og_image_falls_back_to_feature_image() {
        let mut post = hello_world();
        post.feature_image = Some("/content/images/feature.jpg".to_string());
        let fm = FrontMatter::from_post(&post, &OPTS).unwrap();
        assert_eq!(
            fm.og_image,
            "https://blog.example.com/content/images/feature.jpg"
        );

        post.feature_image = None;
        let fm = FrontMatter::from_post(&post, &OPTS).unwrap();
        assert_eq!(fm.og_image, "https://blog.example.com");
    }

    #[test]
    fn test_optional_keys() {
        let mut post = hello_world();
        post.tags.clear();
        post.og_title = Some(String::new());

        let yaml = FrontMatter::from_post(&post, &OPTS)
            .unwrap()
            .to_yaml()
            .unwrap();
        assert!(!yaml.contains("categories"));
        assert!(!yaml.contains("og_title"));
        assert!(!yaml.contains("og_description"));
        assert!(!yaml.contains("canonical"));

        post.og_title = Some("Share me".to_string());
        post.og_description = Some("Shared".to_string());
        post.canonical_url = Some("https://elsewhere.example.com/hello".to_string());
        let fm = FrontMatter::from_post(&post, &OPTS).unwrap();
        assert_eq!(fm.og_title.as_deref(), Some("Share me"));
        assert_eq!(fm.og_description.as_deref(), Some("Shared"));
        assert_eq!(
            fm.canonical.as_deref(),
            Some("https://elsewhere.example.com/hello")
        );
    }

    #[test]
    fn test_no_authors_is_skipped() {
        let mut post = hello_world();
        post.authors.clear();
        assert!(FrontMatter::from_post(&post, &OPTS).is_none());
    }

    #[test]
    fn test_author_without_avatar() {
        let mut post = hello_world();
        post.authors = vec![serde_json::from_str(r#"{"name": "Bob", "profile_image": null}"#).unwrap()];

        let fm = FrontMatter::from_post(&post, &OPTS).unwrap();
        assert_eq!(fm.authors[0].profile_image(), None);
        assert_eq!(fm.authors[0].name(), Some("Bob"));
    }

    #[test]
    fn test_yaml_key_order() {
        let yaml = FrontMatter::from_post(&hello_world(), &OPTS)
            .unwrap()
            .to_yaml()
            .unwrap();
        let keys: Vec<_> = yaml
            .lines()
            .filter(|l| !l.starts_with(' ') && !l.starts_with('-'))
            .filter_map(|l| l.split(':').next())
            .collect();
        assert_eq!(
            keys,
            vec![
                "title",
                "description",
                "pagetitle",
                "slug",
                "feature_image",
                "lastmod",
                "date",
                "summary",
                "i18nlanguage",
                "weight",
                "draft",
                "og_image",
                "categories",
                "authors",
            ]
        );
        assert!(yaml.contains("weight: 0\n"));
        assert!(yaml.contains("draft: false\n"));
        assert!(yaml.contains("feature_image: null\n"));
    }
}
