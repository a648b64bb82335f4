//! Error boundary - the single place handler failures become HTTP responses.

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use postline_core::error::RepoError;
use postline_core::ports::BrokerError;
use postline_shared::ErrorResponse;

/// Application-level error type.
///
/// Every variant but `Internal` is a recognized kind and reports its own
/// message; `Internal` is rendered as an opaque 500.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Name reported in the `error` field of the envelope.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NotFound",
            AppError::Validation(_) => "ValidationError",
            AppError::Internal(_) => "InternalError",
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, AppError::Internal(_))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let body = if self.is_recognized() {
            ErrorResponse::new(self.kind(), status.as_u16(), self.to_string())
        } else {
            tracing::error!(error = ?self, "Unexpected error");
            ErrorResponse::internal_error()
        };

        HttpResponse::build(status).json(body)
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound { .. } => AppError::NotFound(err.to_string()),
            RepoError::Connection(_) | RepoError::Query(_) => AppError::Internal(err.into()),
        }
    }
}

impl From<BrokerError> for AppError {
    fn from(err: BrokerError) -> Self {
        AppError::Internal(err.into())
    }
}

/// Path segments that fail to parse (e.g. a non-numeric id).
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    AppError::Validation(err.to_string()).into()
}

/// Missing, malformed or mistyped JSON bodies.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::Validation(err.to_string()).into()
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
