//! Application error type and its HTTP representation.
//!
//! Every fallible operation in the service, repository and handler layers
//! returns [`AppError`]. Handlers rely on its [`IntoResponse`] impl to turn it
//! into a JSON body of the form `{"error": "<message>"}`.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Message returned to clients for any internal failure.
pub const INTERNAL_MESSAGE: &str = "Server error";

/// Name of the unique constraint guarding `links.code`.
const CODE_UNIQUE_CONSTRAINT: &str = "links_code_key";

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

/// Errors surfaced by the link service.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed input (URL, code or request body). Maps to 400.
    #[error("{0}")]
    Validation(String),

    /// Unknown code. Maps to 404.
    #[error("{0}")]
    NotFound(String),

    /// Code already taken. Maps to 409.
    #[error("{0}")]
    Conflict(String),

    /// Store unreachable or any unexpected failure. Maps to 500.
    ///
    /// The detail is logged and never sent to the client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal(detail.into())
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message that is safe to show to a client.
    pub fn public_message(&self) -> &str {
        match self {
            AppError::Validation(message)
            | AppError::NotFound(message)
            | AppError::Conflict(message) => message,
            AppError::Internal(_) => INTERNAL_MESSAGE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal(detail) = &self {
            tracing::error!(error = %detail, "Request failed with internal error");
        }

        let status = self.status_code();
        let body = ErrorBody {
            error: self.public_message(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
            && db.constraint() == Some(CODE_UNIQUE_CONSTRAINT)
        {
            return AppError::conflict("Code already exists");
        }

        AppError::internal(format!("database error: {e}"))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        // Report the first failing rule; field order is not stable, so prefer `url`.
        let field_errors = errors.field_errors();
        let message = ["url", "code"]
            .into_iter()
            .filter_map(|field| field_errors.get(field).copied())
            .chain(field_errors.values().copied())
            .flat_map(|errs| errs.iter())
            .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Invalid request".to_string());

        AppError::bad_request(message)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection, "Rejected request body");
        AppError::bad_request("Invalid request body")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::bad_request("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::not_found("x").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(AppError::conflict("x").status_code(), StatusCode::CONFLICT);
        assert_eq!(
            AppError::internal("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_detail_is_hidden() {
        let err = AppError::internal("relation \"links\" does not exist");
        assert_eq!(err.public_message(), INTERNAL_MESSAGE);
        assert!(err.to_string().contains("relation"));
    }

    #[test]
    fn test_client_messages_pass_through() {
        assert_eq!(
            AppError::bad_request("Invalid URL").public_message(),
            "Invalid URL"
        );
        assert_eq!(
            AppError::conflict("Code already exists").public_message(),
            "Code already exists"
        );
    }

    #[test]
    fn test_non_database_sqlx_error_is_internal() {
        let err: AppError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, AppError::Internal(_)));
    }

    #[test]
    fn test_validation_errors_prefer_url_message() {
        use validator::{ValidationError, ValidationErrors};

        let mut errors = ValidationErrors::new();
        errors.add(
            "code",
            ValidationError::new("regex").with_message("Invalid code format".into()),
        );
        errors.add(
            "url",
            ValidationError::new("url").with_message("Invalid URL".into()),
        );

        let err: AppError = errors.into();
        assert!(matches!(err, AppError::Validation(ref m) if m == "Invalid URL"));
    }
}
