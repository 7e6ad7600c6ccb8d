//! Development-only live reload.
//!
//! Only routed in development mode.

use std::convert::Infallible;

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};

use crate::state::AppState;

/// GET /_dev/events - SSE endpoint for dev reload signals.
///
/// - "connected" event: Sent once when the stream opens
/// - "reload" event: Signals browser to refresh the page
pub async fn dev_events_sse(
    State(state): State<AppState>,
) -> Sse<impl tokio_stream::Stream<Item = Result<Event, Infallible>>> {
    let mut reload_rx = state.subscribe_dev_reload();
    let mut shutdown_rx = state.subscribe_shutdown();

    let stream = async_stream::stream! {
        yield Ok(Event::default().event("connected").data("{}"));

        loop {
            tokio::select! {
                Ok(()) = reload_rx.recv() => {
                    yield Ok(Event::default().event("reload").data("{}"));
                }
                // Shutdown signal - close connection
                _ = shutdown_rx.recv() => {
                    break;
                }
            }
        }
    };

    Sse::new(stream).keep_alive(KeepAlive::default())
}
