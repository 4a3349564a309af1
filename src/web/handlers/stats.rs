//! Link statistics page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::Path, response::IntoResponse};

/// Template for the link statistics page.
///
/// Renders `templates/stats.html` with the code embedded; the page fetches
/// clicks and timestamps from `GET /api/links/{code}`.
#[derive(Template, WebTemplate)]
#[template(path = "stats.html")]
pub struct StatsTemplate {
    pub code: String,
}

/// Renders the statistics page for a specific link.
///
/// # Endpoint
///
/// `GET /code/{code}`
///
/// The page is served for any code; an unknown code shows a "not found"
/// message once the API lookup fails.
pub async fn stats_handler(Path(code): Path<String>) -> impl IntoResponse {
    StatsTemplate { code }
}
