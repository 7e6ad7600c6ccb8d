use std::time::Duration;

use axum::{http::StatusCode, routing::get, Router};
use tower_http::{services::ServeDir, timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    handlers::{
        dev::dev_events_sse,
        health::livez,
        not_found::fallback,
        post::{home, lang_index, post},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", get(home))
        .route("/livez", get(livez))
        .route("/{lang}", get(lang_index))
        .route("/{lang}/{slug}", get(post))
        .nest_service("/build", ServeDir::new(state.config.public_dir.join("build")));

    // Dev-only live reload stream
    if state.config.mode.is_development() {
        router = router.route("/_dev/events", get(dev_events_sse));
    }

    router
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}
