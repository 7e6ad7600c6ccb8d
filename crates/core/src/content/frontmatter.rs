use serde::{Deserialize, Serialize};

use super::{Lang, Slug};

/// Publication state of a post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
    /// Any status string this crate does not know about.
    #[serde(other)]
    Unknown,
}

impl PostStatus {
    pub fn is_published(self) -> bool {
        matches!(self, PostStatus::Published)
    }
}

/// Header metadata of a content file.
///
/// `lang` and `slug` may be omitted by authors; [`Frontmatter::with_route_defaults`]
/// fills them from the route that loaded the file. `slug` carries a leading
/// slash (`/hello`) so that `{lang}{slug}` forms a path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frontmatter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub lang: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    #[serde(default)]
    pub status: PostStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<String>,
    /// Opt-in for client-side hydration of this page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hydrate: Option<bool>,
}

impl Frontmatter {
    /// Fills an empty `lang` / `slug` from the route parameters.
    pub fn with_route_defaults(mut self, lang: &Lang, slug: &Slug) -> Self {
        if self.lang.trim().is_empty() {
            self.lang = lang.as_str().to_string();
        }
        if self.slug.trim().is_empty() {
            self.slug = slug.as_path();
        }
        self
    }

    /// The cover image path, ignoring blank values.
    pub fn cover(&self) -> Option<&str> {
        non_blank(self.cover.as_deref())
    }

    /// The explicit canonical URL, ignoring blank values.
    pub fn canonical(&self) -> Option<&str> {
        non_blank(self.canonical.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_frontmatter() {
        let yaml = r#"
title: Hello
description: First post
lang: en
slug: /hello
canonical: https://dev.to/hello
cover: /images/hello.png
status: published
created: 2023-01-01
updated: 2023-03-05T00:00:00Z
published: 2023-02-01
hydrate: true
"#;
        let fm: Frontmatter = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(fm.title.as_deref(), Some("Hello"));
        assert_eq!(fm.slug, "/hello");
        assert_eq!(fm.status, PostStatus::Published);
        assert_eq!(fm.updated.as_deref(), Some("2023-03-05T00:00:00Z"));
        assert_eq!(fm.created.as_deref(), Some("2023-01-01"));
        assert_eq!(fm.hydrate, Some(true));
        assert_eq!(fm.cover(), Some("/images/hello.png"));
    }

    #[test]
    fn test_missing_status_is_draft() {
        let fm: Frontmatter = serde_yaml::from_str("title: Draft").unwrap();
        assert_eq!(fm.status, PostStatus::Draft);
        assert!(!fm.status.is_published());
    }

    #[test]
    fn test_unknown_status_is_not_published() {
        let fm: Frontmatter = serde_yaml::from_str("status: archived").unwrap();
        assert_eq!(fm.status, PostStatus::Unknown);
        assert!(!fm.status.is_published());
    }

    #[test]
    fn test_with_route_defaults_fills_only_missing_fields() {
        let lang = Lang::parse("es").unwrap();
        let slug = Slug::parse("hola").unwrap();

        let fm = Frontmatter::default().with_route_defaults(&lang, &slug);
        assert_eq!(fm.lang, "es");
        assert_eq!(fm.slug, "/hola");

        let authored = Frontmatter {
            lang: "en".to_string(),
            slug: "/custom".to_string(),
            ..Default::default()
        }
        .with_route_defaults(&lang, &slug);
        assert_eq!(authored.lang, "en");
        assert_eq!(authored.slug, "/custom");
    }

    #[test]
    fn test_blank_cover_and_canonical_are_ignored() {
        let fm = Frontmatter {
            cover: Some("  ".to_string()),
            canonical: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(fm.cover(), None);
        assert_eq!(fm.canonical(), None);
    }
}
