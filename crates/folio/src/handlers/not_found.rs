//! Not Found page.

use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use folio_core::{content::Lang, site::page_title};

use crate::{
    document::{render_document, DocumentProps, RouteMatch},
    error::AppError,
    state::AppState,
};

#[derive(Template)]
#[template(path = "not_found.html")]
struct NotFoundTemplate<'a> {
    message: &'a str,
}

/// The Not Found page in `lang`, with a 404 status.
///
/// Rendered as static markup: no route on this page opts into hydration.
pub fn not_found_page(state: &AppState, lang: &Lang) -> Result<Response, AppError> {
    let message = lang.not_found_message();
    let title = page_title(&state.config.site, Some(message));
    let body = NotFoundTemplate { message }.render()?;

    let html = render_document(
        &state.config,
        DocumentProps {
            lang,
            title: Some(&title),
            matches: &[RouteMatch::root()],
            meta: &[],
            links: &[],
            body,
        },
    )?;

    Ok((StatusCode::NOT_FOUND, Html(html)).into_response())
}

/// Router fallback: Not Found in the default language.
pub async fn fallback(State(state): State<AppState>) -> Result<Response, AppError> {
    not_found_page(&state, &state.config.default_lang)
}
