//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`database`] - Connection pool setup and migrations
//! - [`persistence`] - PostgreSQL repository implementations

pub mod database;
pub mod persistence;
