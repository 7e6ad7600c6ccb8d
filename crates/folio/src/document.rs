//! The HTML document shell wrapping every page.

use askama::Template;
use folio_core::{
    content::Lang,
    site::{feed_links, FeedLink, MetaTag},
};

use crate::config::Config;

/// A `<link>` contributed by a route (stylesheets and the like).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteLink {
    pub rel: &'static str,
    pub href: String,
}

impl RouteLink {
    pub fn stylesheet(href: impl Into<String>) -> Self {
        Self {
            rel: "stylesheet",
            href: href.into(),
        }
    }
}

/// Data a matched route exposes to the shell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteData {
    pub canonical: Option<String>,
    pub jsonld: Option<serde_json::Value>,
}

/// One matched route, ordered root first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteMatch {
    /// `None` when the route does not declare a hydration preference.
    pub hydrate: Option<bool>,
    pub data: Option<RouteData>,
}

impl RouteMatch {
    /// The layout route every page matches first.
    pub fn root() -> Self {
        Self::default()
    }
}

/// The most specific route that declares a flag decides; no declaration
/// means static markup.
pub fn should_hydrate(matches: &[RouteMatch]) -> bool {
    matches
        .iter()
        .rev()
        .find_map(|m| m.hydrate)
        .unwrap_or(false)
}

fn current_route_data(matches: &[RouteMatch]) -> Option<&RouteData> {
    matches.last().and_then(|m| m.data.as_ref())
}

/// Everything a page hands to the shell.
#[derive(Debug)]
pub struct DocumentProps<'a> {
    pub lang: &'a Lang,
    pub title: Option<&'a str>,
    pub matches: &'a [RouteMatch],
    pub meta: &'a [MetaTag],
    pub links: &'a [RouteLink],
    /// Rendered page markup.
    pub body: String,
}

#[derive(Template)]
#[template(path = "document.html")]
struct DocumentTemplate<'a> {
    lang: &'a str,
    title: Option<&'a str>,
    meta: Vec<&'a MetaTag>,
    links: &'a [RouteLink],
    canonical: Option<&'a str>,
    feeds: Vec<FeedLink>,
    google_site_verification: Option<&'a str>,
    jsonld: Option<String>,
    body: String,
    hydrate: bool,
    client_entry: &'a str,
    live_reload: bool,
}

/// Renders a complete HTML document.
pub fn render_document(config: &Config, props: DocumentProps<'_>) -> Result<String, askama::Error> {
    let route_data = current_route_data(props.matches);

    let title = props.title.or_else(|| {
        props
            .meta
            .iter()
            .find(|tag| tag.is_title())
            .map(|tag| tag.content.as_str())
    });

    DocumentTemplate {
        lang: props.lang.as_str(),
        title,
        meta: props.meta.iter().filter(|tag| !tag.is_title()).collect(),
        links: props.links,
        canonical: route_data
            .and_then(|data| data.canonical.as_deref())
            .filter(|canonical| !canonical.is_empty()),
        feeds: feed_links(&config.site, props.lang),
        google_site_verification: config.google_site_verification.as_deref(),
        jsonld: route_data
            .and_then(|data| data.jsonld.as_ref())
            .map(|value| value.to_string()),
        body: props.body,
        hydrate: should_hydrate(props.matches),
        client_entry: &config.client_entry,
        live_reload: config.mode.is_development(),
    }
    .render()
}
