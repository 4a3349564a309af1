//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::{AppError, INTERNAL_MESSAGE};
use crate::state::AppState;

/// Body of every redirect miss, whatever the reason.
pub const NOT_FOUND_BODY: &str = "Not found";

/// Redirects a short code to its destination URL and counts the click.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Validate the code shape
/// 2. Atomically increment `clicks` and set `last_clicked`, fetching the URL
/// 3. Return 302 Found with `Location` set to the destination
///
/// # Errors
///
/// Returns 404 with a plain-text body for malformed and unknown codes alike.
/// Returns 500 with a plain-text body if the store fails.
pub async fn redirect_handler(Path(code): Path<String>, State(state): State<AppState>) -> Response {
    match state.link_service.follow(&code).await {
        Ok(url) => (StatusCode::FOUND, [(header::LOCATION, url)]).into_response(),
        Err(AppError::NotFound(_)) => (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response(),
        Err(e) => {
            tracing::error!(error = %e, %code, "Redirect failed");
            (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE).into_response()
        }
    }
}
