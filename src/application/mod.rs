//! Application layer services implementing business logic.
//!
//! Services coordinate repository calls, validation and code generation, and
//! expose a small API to the HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Link creation, lookup, deletion and redirects

pub mod services;
