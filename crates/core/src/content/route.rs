use std::fmt;

use serde::{Deserialize, Serialize};

use super::RouteError;

/// Slug used when a route does not name one.
pub const INDEX_SLUG: &str = "index";

/// A validated language tag such as `en` or `pt-BR`.
///
/// Only a primary subtag of two or three lowercase letters and an optional
/// alphanumeric region/script subtag are accepted, so a `Lang` is always safe
/// to use as a file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Lang(String);

impl Lang {
    /// Validates and wraps a language tag.
    pub fn parse(value: &str) -> Result<Self, RouteError> {
        let (primary, region) = match value.split_once('-') {
            Some((primary, region)) => (primary, Some(region)),
            None => (value, None),
        };

        let primary_ok =
            (2..=3).contains(&primary.len()) && primary.bytes().all(|b| b.is_ascii_lowercase());
        let region_ok = region.is_none_or(|r| {
            (2..=8).contains(&r.len()) && r.bytes().all(|b| b.is_ascii_alphanumeric())
        });

        if primary_ok && region_ok {
            Ok(Self(value.to_string()))
        } else {
            Err(RouteError::InvalidLang(value.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The primary subtag (`pt` for `pt-BR`).
    pub fn primary(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }

    /// Localized heading for the Not Found page.
    pub fn not_found_message(&self) -> &'static str {
        match self.primary() {
            "es" => "Página no encontrada",
            "de" => "Seite nicht gefunden",
            _ => "Page not found",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Lang {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Lang::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// A validated content slug: lowercase alphanumerics, `-` and `_`, not
/// starting with a separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    pub fn parse(value: &str) -> Result<Self, RouteError> {
        let mut bytes = value.bytes();
        let valid = match bytes.next() {
            Some(first) if first.is_ascii_lowercase() || first.is_ascii_digit() => bytes
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'_'),
            _ => false,
        };

        if valid {
            Ok(Self(value.to_string()))
        } else {
            Err(RouteError::InvalidSlug(value.to_string()))
        }
    }

    pub fn index() -> Self {
        Self(INDEX_SLUG.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The slug as it appears in frontmatter and URLs (`/hello`).
    pub fn as_path(&self) -> String {
        format!("/{}", self.0)
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raw `lang` / `slug` path parameters, either of which may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteParams {
    pub lang: Option<String>,
    pub slug: Option<String>,
}

impl RouteParams {
    pub fn new(lang: Option<&str>, slug: Option<&str>) -> Self {
        Self {
            lang: lang.map(str::to_string),
            slug: slug.map(str::to_string),
        }
    }

    /// Applies the defaults (`default_lang`, [`INDEX_SLUG`]) and validates
    /// both parameters.
    pub fn resolve(&self, default_lang: &Lang) -> Result<(Lang, Slug), RouteError> {
        let lang = match self.lang.as_deref() {
            Some(lang) => Lang::parse(lang)?,
            None => default_lang.clone(),
        };
        let slug = match self.slug.as_deref() {
            Some(slug) => Slug::parse(slug)?,
            None => Slug::index(),
        };
        Ok((lang, slug))
    }
}
