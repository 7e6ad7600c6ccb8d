//! Visit counter backends.

mod http;
mod memory;

use std::sync::Arc;

use folio_core::visits::VisitCounter;

pub use http::HttpVisitCounter;
pub use memory::InMemoryVisitCounter;

use crate::config::Config;

/// The HTTP backend when `VISITS_URL` is configured, in-memory otherwise.
pub fn from_config(config: &Config) -> anyhow::Result<Arc<dyn VisitCounter>> {
    match &config.visits_url {
        Some(url) => {
            tracing::info!(url = %url, timeout = ?config.visits_timeout, "Using HTTP visit counter");
            Ok(Arc::new(HttpVisitCounter::new(url, config.visits_timeout)?))
        }
        None => {
            tracing::info!("Using in-memory visit counter");
            Ok(Arc::new(InMemoryVisitCounter::new()))
        }
    }
}
