//! Pure functions for mapping loader errors to HTTP status codes.

use super::LoaderError;

/// Maps a [`LoaderError`] to an HTTP status code.
///
/// - `NotFound` -> 404 (Not Found)
/// - `VisitCount` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use folio_core::content::Lang;
/// use folio_core::loader::{loader_error_to_status_code, LoaderError, NotFoundCause};
///
/// let lang = Lang::parse("en").unwrap();
/// let error = LoaderError::not_found(&lang, NotFoundCause::MissingContent);
/// assert_eq!(loader_error_to_status_code(&error), 404);
/// ```
pub fn loader_error_to_status_code(error: &LoaderError) -> u16 {
    match error {
        LoaderError::NotFound { .. } => 404,
        LoaderError::VisitCount(_) => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{content::Lang, loader::NotFoundCause, visits::VisitError};

    #[test]
    fn test_not_found_maps_to_404() {
        let lang = Lang::parse("de").unwrap();
        for cause in [
            NotFoundCause::InvalidRoute,
            NotFoundCause::MissingContent,
            NotFoundCause::CompileFailed,
            NotFoundCause::Unpublished,
        ] {
            assert_eq!(
                loader_error_to_status_code(&LoaderError::not_found(&lang, cause)),
                404
            );
        }
    }

    #[test]
    fn test_visit_count_maps_to_500() {
        let error = LoaderError::VisitCount(VisitError::InvalidResponse("no total".to_string()));
        assert_eq!(loader_error_to_status_code(&error), 500);
    }
}
