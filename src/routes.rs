//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /healthz`      - Liveness check
//! - `GET  /`             - Dashboard
//! - `GET  /code/{code}`  - Link statistics page
//! - `/api/*`             - JSON REST API
//! - `/static/*`          - Static assets
//! - `GET  /{code}`       - Short link redirect
//!
//! Static paths take precedence over the `/{code}` capture, so a code can
//! never shadow `healthz` or the API.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//!
//! Trailing-slash normalization wraps the router in [`crate::server`].

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower_http::services::ServeDir;

/// Directory served under `/static`.
const STATIC_DIR: &str = "static";

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .merge(web::routes::routes())
        .nest("/api", api::routes::routes())
        .route("/{code}", get(redirect_handler))
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .with_state(state)
        .layer(tracing::layer())
}
