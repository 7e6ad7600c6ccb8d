//! Post pages: `/`, `/{lang}` and `/{lang}/{slug}`.

use askama::Template;
use axum::{
    extract::{OriginalUri, Path, RawQuery, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use folio_core::{
    content::{Lang, RouteParams},
    loader::{LoaderData, LoaderError},
    site::{derive_post_meta, discuss_url, share_url},
};

use crate::{
    components::post_components,
    document::{render_document, DocumentProps, RouteData, RouteLink, RouteMatch},
    error::AppError,
    handlers::not_found::not_found_page,
    loader::load_post,
    state::AppState,
};

/// Stylesheets for highlighted code blocks, served from the public build.
pub const PRISM_STYLESHEETS: [&str; 2] = ["/build/styles/prism-plus.css", "/build/styles/prism-theme.css"];

#[derive(Template)]
#[template(path = "post.html")]
struct PostTemplate<'a> {
    content: &'a str,
    discuss_url: &'a str,
    share_url: &'a str,
}

/// Path parameters of `/{lang}`.
#[derive(Debug, serde::Deserialize)]
pub struct LangParam {
    lang: String,
}

/// Path parameters of `/{lang}/{slug}`.
#[derive(Debug, serde::Deserialize)]
pub struct PostParams {
    lang: String,
    slug: String,
}

/// GET / - the default language's index post.
pub async fn home(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    RawQuery(query): RawQuery,
) -> Result<Response, AppError> {
    respond(&state, RouteParams::default(), uri.path(), query.as_deref()).await
}

/// GET /{lang} - a language's index post.
pub async fn lang_index(
    State(state): State<AppState>,
    Path(params): Path<LangParam>,
    OriginalUri(uri): OriginalUri,
    RawQuery(query): RawQuery,
) -> Result<Response, AppError> {
    let params = RouteParams::new(Some(&params.lang), None);
    respond(&state, params, uri.path(), query.as_deref()).await
}

/// GET /{lang}/{slug} - a post.
pub async fn post(
    State(state): State<AppState>,
    Path(params): Path<PostParams>,
    OriginalUri(uri): OriginalUri,
    RawQuery(query): RawQuery,
) -> Result<Response, AppError> {
    let params = RouteParams::new(Some(&params.lang), Some(&params.slug));
    respond(&state, params, uri.path(), query.as_deref()).await
}

/// `?_data` asks for the loader data as JSON instead of the page.
pub fn is_data_request(query: Option<&str>) -> bool {
    query.is_some_and(|query| {
        query
            .split('&')
            .any(|pair| pair.split('=').next() == Some("_data"))
    })
}

async fn respond(
    state: &AppState,
    params: RouteParams,
    path: &str,
    query: Option<&str>,
) -> Result<Response, AppError> {
    let data_request = is_data_request(query);

    match load_post(state, &params, path).await {
        Ok(data) if data_request => Ok(Json(data).into_response()),
        Ok(data) => render_post(state, &data),
        Err(LoaderError::NotFound { lang, cause }) => {
            tracing::debug!(lang = %lang, cause = cause.as_str(), path, "Post not found");
            if data_request {
                let body = serde_json::json!({ "error": "Not found" });
                Ok((StatusCode::NOT_FOUND, Json(body)).into_response())
            } else {
                not_found_page(state, &lang)
            }
        }
        Err(e) => Err(e.into()),
    }
}

fn render_post(state: &AppState, data: &LoaderData) -> Result<Response, AppError> {
    let config = &state.config;
    let frontmatter = &data.frontmatter;

    let content = state
        .compiler
        .component(&data.code)
        .render(&post_components(frontmatter));
    let discuss = discuss_url(&data.canonical);
    let share = share_url(&config.site, &data.canonical, frontmatter.title.as_deref());
    let body = PostTemplate {
        content: &content,
        discuss_url: &discuss,
        share_url: &share,
    }
    .render()?;

    let meta = derive_post_meta(&config.site, frontmatter);
    let links = PRISM_STYLESHEETS.map(RouteLink::stylesheet);
    let matches = [
        RouteMatch::root(),
        RouteMatch {
            hydrate: frontmatter.hydrate,
            data: Some(RouteData {
                canonical: Some(data.canonical.clone()),
                jsonld: data.jsonld.clone(),
            }),
        },
    ];
    let lang = Lang::parse(&frontmatter.lang).unwrap_or_else(|_| config.default_lang.clone());

    let html = render_document(
        config,
        DocumentProps {
            lang: &lang,
            title: None,
            matches: &matches,
            meta: &meta,
            links: &links,
            body,
        },
    )?;

    Ok(Html(html).into_response())
}
