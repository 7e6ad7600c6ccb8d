use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use folio_core::loader::{loader_error_to_status_code, LoaderError};

/// Application error type that wraps `anyhow::Error`.
///
/// A wrapped [`LoaderError`] decides the status code; anything else is a 500.
/// Server errors never expose their cause to the client.
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self.0.downcast_ref::<LoaderError>() {
            Some(error) => StatusCode::from_u16(loader_error_to_status_code(error))
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            None => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        if status_code.is_server_error() {
            tracing::error!(error = %self.0, "Application error");
            (status_code, "Something went wrong").into_response()
        } else {
            tracing::warn!(error = %self.0, "Request failed");
            (status_code, self.0.to_string()).into_response()
        }
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
