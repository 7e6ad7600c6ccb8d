use thiserror::Error;

/// Errors produced while validating route parameters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("Invalid language tag: {0}")]
    InvalidLang(String),
    #[error("Invalid slug: {0}")]
    InvalidSlug(String),
}
