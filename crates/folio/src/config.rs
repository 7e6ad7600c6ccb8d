use std::{env, path::PathBuf, time::Duration};

use folio_core::{
    content::{Lang, RouteError},
    site::{RuntimeMode, SiteConfig, SiteConfigError, DEFAULT_TITLE_SEPARATOR},
};
use thiserror::Error;

const DEFAULT_ROOT_URL: &str = "http://localhost:3000";
const DEFAULT_LANG: &str = "en";
const DEFAULT_CLIENT_ENTRY: &str = "/build/entry.client.js";
const DEFAULT_VISITS_TIMEOUT_MS: u64 = 2_000;

/// Errors that can occur while loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid FOLIO_ENV: {0}")]
    InvalidMode(String),
    #[error(transparent)]
    Site(#[from] SiteConfigError),
    #[error("Invalid DEFAULT_LANG: {0}")]
    DefaultLang(#[from] RouteError),
    #[error("Invalid {name}: {value}")]
    InvalidNumber { name: &'static str, value: String },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Runtime mode (default: production)
    pub mode: RuntimeMode,
    /// Site-wide SEO constants
    pub site: SiteConfig,
    /// Language used when a route has none (default: "en")
    pub default_lang: Lang,
    /// Root of the `{slug}/{lang}.mdx` tree (default: "content")
    pub content_dir: PathBuf,
    /// Static assets served under `/build` (default: "public")
    pub public_dir: PathBuf,
    /// Client bundle loaded on hydrated pages
    pub client_entry: String,
    /// Base URL of the visit counter service; in-memory counting when unset
    pub visits_url: Option<String>,
    pub visits_timeout: Duration,
    pub google_site_verification: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `FOLIO_ENV` - production, development or test (default: production)
    /// - `ROOT_URL` - Absolute site origin (default: "http://localhost:3000")
    /// - `SITE_DOMAIN` - Domain shown in titles (default: host of `ROOT_URL`)
    /// - `TITLE_SEPARATOR` - Between title and domain (default: " — ")
    /// - `TWITTER_HANDLE` - Used in Twitter meta tags and share links
    /// - `SITE_AUTHOR` - Used in feed link titles
    /// - `DEFAULT_LANG` - Default language tag (default: "en")
    /// - `CONTENT_DIR` - Content root (default: "content")
    /// - `PUBLIC_DIR` - Static asset root (default: "public")
    /// - `CLIENT_ENTRY` - Client script path (default: "/build/entry.client.js")
    /// - `VISITS_URL` - Visit counter service base URL (optional)
    /// - `VISITS_TIMEOUT_MS` - Visit counter request timeout (default: 2000)
    /// - `GOOGLE_SITE_VERIFICATION` - Search console token (optional)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mode = match var("FOLIO_ENV") {
            Some(mode) => mode.parse().map_err(ConfigError::InvalidMode)?,
            None => RuntimeMode::default(),
        };

        let mut site = SiteConfig::new(&var("ROOT_URL").unwrap_or_else(|| DEFAULT_ROOT_URL.into()))?
            .with_title_separator(
                lookup("TITLE_SEPARATOR").unwrap_or_else(|| DEFAULT_TITLE_SEPARATOR.into()),
            )
            .with_twitter_handle(var("TWITTER_HANDLE").unwrap_or_default())
            .with_author(var("SITE_AUTHOR").unwrap_or_default());
        if let Some(domain) = var("SITE_DOMAIN") {
            site = site.with_domain(domain);
        }

        let visits_timeout_ms = match var("VISITS_TIMEOUT_MS") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidNumber {
                name: "VISITS_TIMEOUT_MS",
                value,
            })?,
            None => DEFAULT_VISITS_TIMEOUT_MS,
        };

        Ok(Self {
            mode,
            site,
            default_lang: Lang::parse(&var("DEFAULT_LANG").unwrap_or_else(|| DEFAULT_LANG.into()))?,
            content_dir: var("CONTENT_DIR").unwrap_or_else(|| "content".into()).into(),
            public_dir: var("PUBLIC_DIR").unwrap_or_else(|| "public".into()).into(),
            client_entry: var("CLIENT_ENTRY").unwrap_or_else(|| DEFAULT_CLIENT_ENTRY.into()),
            visits_url: var("VISITS_URL").map(|url| url.trim_end_matches('/').to_string()),
            visits_timeout: Duration::from_millis(visits_timeout_ms),
            google_site_verification: var("GOOGLE_SITE_VERIFICATION"),
        })
    }
}

#[cfg(test)]
impl Config {
    /// Production configuration for `https://example.com` serving `content_dir`.
    pub fn for_tests(content_dir: impl Into<PathBuf>) -> Self {
        let mut config = Self::from_lookup(|key| match key {
            "ROOT_URL" => Some("https://example.com".to_string()),
            "TWITTER_HANDLE" => Some("@example".to_string()),
            _ => None,
        })
        .expect("test configuration is valid");
        config.content_dir = content_dir.into();
        config
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_default_values() {
        let config = load(&[]).unwrap();

        assert_eq!(config.mode, RuntimeMode::Production);
        assert_eq!(config.site.root_url, "http://localhost:3000");
        assert_eq!(config.site.domain, "localhost");
        assert_eq!(config.site.title_separator, " — ");
        assert_eq!(config.default_lang.as_str(), "en");
        assert_eq!(config.content_dir, PathBuf::from("content"));
        assert_eq!(config.public_dir, PathBuf::from("public"));
        assert_eq!(config.client_entry, "/build/entry.client.js");
        assert_eq!(config.visits_url, None);
        assert_eq!(config.visits_timeout, Duration::from_millis(2_000));
        assert_eq!(config.google_site_verification, None);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("FOLIO_ENV", "development"),
            ("ROOT_URL", "https://blog.example.com/"),
            ("SITE_DOMAIN", "example.com"),
            ("TITLE_SEPARATOR", " | "),
            ("DEFAULT_LANG", "es"),
            ("VISITS_URL", "http://visits.internal/"),
            ("VISITS_TIMEOUT_MS", "150"),
        ])
        .unwrap();

        assert_eq!(config.mode, RuntimeMode::Development);
        assert_eq!(config.site.root_url, "https://blog.example.com");
        assert_eq!(config.site.domain, "example.com");
        assert_eq!(config.site.title_separator, " | ");
        assert_eq!(config.default_lang.as_str(), "es");
        assert_eq!(config.visits_url.as_deref(), Some("http://visits.internal"));
        assert_eq!(config.visits_timeout, Duration::from_millis(150));
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            load(&[("FOLIO_ENV", "staging")]),
            Err(ConfigError::InvalidMode(_))
        ));
        assert!(matches!(
            load(&[("ROOT_URL", "example.com")]),
            Err(ConfigError::Site(_))
        ));
        assert!(matches!(
            load(&[("DEFAULT_LANG", "../etc")]),
            Err(ConfigError::DefaultLang(_))
        ));
        assert!(matches!(
            load(&[("VISITS_TIMEOUT_MS", "soon")]),
            Err(ConfigError::InvalidNumber { name: "VISITS_TIMEOUT_MS", .. })
        ));
    }
}
