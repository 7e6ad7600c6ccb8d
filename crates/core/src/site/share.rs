//! Social links shown under a post.

use super::{SiteConfig, MISSING_TITLE};

/// Twitter search for conversations mentioning `canonical`.
pub fn discuss_url(canonical: &str) -> String {
    format!(
        "https://twitter.com/search?q={}",
        urlencoding::encode(canonical)
    )
}

/// Tweet intent sharing `canonical` as `"{title} via {handle}\n"`.
pub fn share_url(site: &SiteConfig, canonical: &str, title: Option<&str>) -> String {
    let title = title
        .filter(|t| !t.trim().is_empty())
        .unwrap_or(MISSING_TITLE);
    let text = format!("{title} via {}\n", site.twitter_handle);
    format!(
        "https://twitter.com/intent/tweet?url={}&text={}",
        urlencoding::encode(canonical),
        urlencoding::encode(&text)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discuss_url_encodes_canonical() {
        assert_eq!(
            discuss_url("https://example.com/en/hello"),
            "https://twitter.com/search?q=https%3A%2F%2Fexample.com%2Fen%2Fhello"
        );
    }

    #[test]
    fn test_share_url_includes_title_and_handle() {
        let site = SiteConfig::new("https://example.com")
            .unwrap()
            .with_twitter_handle("@example");
        assert_eq!(
            share_url(&site, "https://example.com/en/hello", Some("Hello & bye")),
            "https://twitter.com/intent/tweet?url=https%3A%2F%2Fexample.com%2Fen%2Fhello\
             &text=Hello%20%26%20bye%20via%20%40example%0A"
        );
    }

    #[test]
    fn test_share_url_without_title() {
        let site = SiteConfig::new("https://example.com").unwrap();
        assert!(share_url(&site, "https://example.com/en/x", None).contains("text=Missing%20Title%20via%20%0A"));
    }
}
