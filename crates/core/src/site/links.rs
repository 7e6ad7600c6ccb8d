//! Per-language feed and sitemap links emitted in every document head.

use crate::content::Lang;

use super::SiteConfig;

/// A `<link>` element pointing at a feed or sitemap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedLink {
    pub rel: &'static str,
    pub media_type: &'static str,
    pub href: String,
    pub title: Option<String>,
}

/// RSS, JSON feed and sitemap links for `lang`.
///
/// Feed links are absolute; the sitemap link is root-relative.
pub fn feed_links(site: &SiteConfig, lang: &Lang) -> Vec<FeedLink> {
    let owner = if site.author.is_empty() {
        site.domain.clone()
    } else {
        format!("{}'s", site.author)
    };

    vec![
        FeedLink {
            rel: "alternate",
            media_type: "application/rss+xml",
            href: format!("{}/{lang}/feed.xml", site.root_url),
            title: Some(format!("{owner} XML Feed")),
        },
        FeedLink {
            rel: "alternate",
            media_type: "application/feed+json",
            href: format!("{}/{lang}/feed.json", site.root_url),
            title: Some(format!("{owner} JSON Feed")),
        },
        FeedLink {
            rel: "sitemap",
            media_type: "application/xml",
            href: format!("/{lang}/sitemap.xml"),
            title: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_links_per_language() {
        let site = SiteConfig::new("https://example.com")
            .unwrap()
            .with_author("Can");
        let links = feed_links(&site, &Lang::parse("es").unwrap());

        assert_eq!(links.len(), 3);
        assert_eq!(links[0].href, "https://example.com/es/feed.xml");
        assert_eq!(links[0].title.as_deref(), Some("Can's XML Feed"));
        assert_eq!(links[1].href, "https://example.com/es/feed.json");
        assert_eq!(links[1].media_type, "application/feed+json");
        assert_eq!(links[2].rel, "sitemap");
        assert_eq!(links[2].href, "/es/sitemap.xml");
    }

    #[test]
    fn test_feed_titles_fall_back_to_domain() {
        let site = SiteConfig::new("https://example.com").unwrap();
        let links = feed_links(&site, &Lang::parse("en").unwrap());
        assert_eq!(links[0].title.as_deref(), Some("example.com XML Feed"));
    }
}
