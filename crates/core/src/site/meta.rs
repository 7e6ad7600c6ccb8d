//! SEO metadata derived from frontmatter.

use crate::content::Frontmatter;

use super::SiteConfig;

pub const MISSING_TITLE: &str = "Missing Title";
pub const MISSING_DESCRIPTION: &str = "Missing description";

/// How a meta entry is rendered in the document head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaAttr {
    /// Rendered as `<title>`.
    Title,
    /// `<meta name="..." content="...">`
    Name,
    /// `<meta property="..." content="...">` (Open Graph).
    Property,
}

/// A single page metadata entry, keyed the way head renderers expect
/// (`title`, `description`, `og:url`, `twitter:card`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub key: &'static str,
    pub content: String,
}

impl MetaTag {
    pub fn new(key: &'static str, content: impl Into<String>) -> Self {
        Self {
            key,
            content: content.into(),
        }
    }

    pub fn attr(&self) -> MetaAttr {
        if self.key == "title" {
            MetaAttr::Title
        } else if self.key.starts_with("og:") {
            MetaAttr::Property
        } else {
            MetaAttr::Name
        }
    }

    pub fn is_title(&self) -> bool {
        self.attr() == MetaAttr::Title
    }

    /// Attribute carrying the key on a `<meta>` element.
    pub fn attr_name(&self) -> &'static str {
        match self.attr() {
            MetaAttr::Property => "property",
            MetaAttr::Title | MetaAttr::Name => "name",
        }
    }
}

/// `"{title}{separator}{domain}"`, with a placeholder for missing titles.
pub fn page_title(site: &SiteConfig, title: Option<&str>) -> String {
    let title = title
        .filter(|t| !t.trim().is_empty())
        .unwrap_or(MISSING_TITLE);
    format!("{title}{}{}", site.title_separator, site.domain)
}

/// `{root}/{lang}{slug}`: where the post lives on this site.
pub fn post_url(site: &SiteConfig, frontmatter: &Frontmatter) -> String {
    format!("{}/{}{}", site.root_url, frontmatter.lang, frontmatter.slug)
}

/// The explicit canonical URL, or [`post_url`].
pub fn canonical_url(site: &SiteConfig, frontmatter: &Frontmatter) -> String {
    match frontmatter.canonical() {
        Some(canonical) => canonical.to_string(),
        None => post_url(site, frontmatter),
    }
}

/// Twitter card type: large image cards for posts with a cover.
pub fn twitter_card(frontmatter: &Frontmatter) -> &'static str {
    if frontmatter.cover().is_some() {
        "summary_large_image"
    } else {
        "summary"
    }
}

/// Meta entries for a post page.
///
/// `og:url` always points at this site, even when the canonical URL is
/// elsewhere. `og:image` is only emitted when the post has a cover.
pub fn derive_post_meta(site: &SiteConfig, frontmatter: &Frontmatter) -> Vec<MetaTag> {
    let title = page_title(site, frontmatter.title.as_deref());
    let description = frontmatter
        .description
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or(MISSING_DESCRIPTION)
        .to_string();

    let mut tags = vec![
        MetaTag::new("title", title.clone()),
        MetaTag::new("description", description.clone()),
        MetaTag::new("og:url", post_url(site, frontmatter)),
        MetaTag::new("og:title", title.clone()),
        MetaTag::new("og:description", description),
    ];
    if let Some(cover) = frontmatter.cover() {
        tags.push(MetaTag::new("og:image", format!("{}{cover}", site.root_url)));
    }
    tags.extend([
        MetaTag::new("twitter:card", twitter_card(frontmatter)),
        MetaTag::new("twitter:creator", site.twitter_handle.clone()),
        MetaTag::new("twitter:site", site.twitter_handle.clone()),
        MetaTag::new("twitter:alt", title),
    ]);
    tags
}
