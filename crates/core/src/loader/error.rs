use thiserror::Error;

use crate::{content::Lang, visits::VisitError};

/// Why a request ended in Not Found. Only used for logging; clients always
/// see the same Not Found page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundCause {
    InvalidRoute,
    MissingContent,
    CompileFailed,
    Unpublished,
}

impl NotFoundCause {
    pub fn as_str(self) -> &'static str {
        match self {
            NotFoundCause::InvalidRoute => "invalid route",
            NotFoundCause::MissingContent => "missing content",
            NotFoundCause::CompileFailed => "compile failed",
            NotFoundCause::Unpublished => "unpublished",
        }
    }
}

/// Errors that can occur while loading a post.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoaderError {
    #[error("Not found ({lang}): {}", .cause.as_str())]
    NotFound { lang: Lang, cause: NotFoundCause },
    #[error("Visit count lookup failed: {0}")]
    VisitCount(#[from] VisitError),
}

impl LoaderError {
    pub fn not_found(lang: &Lang, cause: NotFoundCause) -> Self {
        LoaderError::NotFound {
            lang: lang.clone(),
            cause,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loader_error_display() {
        let lang = Lang::parse("en").unwrap();
        assert_eq!(
            LoaderError::not_found(&lang, NotFoundCause::Unpublished).to_string(),
            "Not found (en): unpublished"
        );
        assert_eq!(
            LoaderError::from(VisitError::Unavailable("timeout".to_string())).to_string(),
            "Visit count lookup failed: Visit counter unavailable: timeout"
        );
    }
}
