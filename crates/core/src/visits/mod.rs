//! Visit counting collaborator.

use async_trait::async_trait;
use thiserror::Error;

/// Errors reported by a visit counter backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VisitError {
    #[error("Visit counter unavailable: {0}")]
    Unavailable(String),
    #[error("Invalid visit counter response: {0}")]
    InvalidResponse(String),
}

/// Looks up (and records) visits for a request path.
#[async_trait]
pub trait VisitCounter: Send + Sync {
    /// Total visits of `path`, including the current request.
    async fn total_path_visits(&self, path: &str) -> Result<u64, VisitError>;
}
