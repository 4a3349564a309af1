//! Web dashboard layer for browser-based UI.
//!
//! Provides HTML pages for link management and per-link statistics.
//! Uses Askama templates for server-side rendering; the pages load their
//! data from the JSON API.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Dashboard route configuration

pub mod handlers;
pub mod routes;
