use thiserror::Error;
use url::Url;

/// Separator between a page title and the site domain.
pub const DEFAULT_TITLE_SEPARATOR: &str = " — ";

/// Errors that can occur when building a [`SiteConfig`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SiteConfigError {
    #[error("Invalid root URL {url}: {reason}")]
    InvalidRootUrl { url: String, reason: String },
    #[error("Root URL must use http or https: {0}")]
    UnsupportedScheme(String),
    #[error("Root URL has no host: {0}")]
    MissingHost(String),
}

/// Site-wide constants used for SEO metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Absolute origin without a trailing slash (`https://example.com`).
    pub root_url: String,
    /// Domain shown after the title separator (`example.com`).
    pub domain: String,
    pub title_separator: String,
    pub twitter_handle: String,
    /// Name used in feed link titles.
    pub author: String,
}

impl SiteConfig {
    /// Validates `root_url` and derives the domain from its host.
    pub fn new(root_url: &str) -> Result<Self, SiteConfigError> {
        let trimmed = root_url.trim().trim_end_matches('/');
        let url = Url::parse(trimmed).map_err(|e| SiteConfigError::InvalidRootUrl {
            url: root_url.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(SiteConfigError::UnsupportedScheme(root_url.to_string()));
        }
        let domain = url
            .host_str()
            .ok_or_else(|| SiteConfigError::MissingHost(root_url.to_string()))?
            .to_string();

        Ok(Self {
            root_url: trimmed.to_string(),
            domain,
            title_separator: DEFAULT_TITLE_SEPARATOR.to_string(),
            twitter_handle: String::new(),
            author: String::new(),
        })
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    pub fn with_title_separator(mut self, separator: impl Into<String>) -> Self {
        self.title_separator = separator.into();
        self
    }

    pub fn with_twitter_handle(mut self, handle: impl Into<String>) -> Self {
        self.twitter_handle = handle.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }
}
