use std::time::Duration;

use async_trait::async_trait;
use folio_core::visits::{VisitCounter, VisitError};
use serde::Deserialize;

/// Visit counter backed by an external service.
///
/// `GET {base_url}/api/visits?path={path}` records a visit and answers
/// `{"total": n}`.
#[derive(Debug, Clone)]
pub struct HttpVisitCounter {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct VisitsResponse {
    total: u64,
}

impl HttpVisitCounter {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: reqwest::Client::builder().timeout(timeout).build()?,
            base_url: base_url.into(),
        })
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn handle_response(&self, response: reqwest::Response) -> Result<u64, VisitError> {
        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(VisitError::Unavailable(format!("{status}: {message}")));
        }

        response
            .json::<VisitsResponse>()
            .await
            .map(|body| body.total)
            .map_err(|e| VisitError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl VisitCounter for HttpVisitCounter {
    async fn total_path_visits(&self, path: &str) -> Result<u64, VisitError> {
        let response = self
            .client
            .get(self.url("/api/visits"))
            .query(&[("path", path)])
            .send()
            .await
            .map_err(|e| VisitError::Unavailable(e.to_string()))?;

        self.handle_response(response).await
    }
}
