//! Core domain entities.
//!
//! - [`Link`] - A stored short code → URL mapping with usage counters
//! - [`NewLink`] - Input for creating a link
//! - [`LinkTotals`] - Aggregate counts across all links

pub mod link;

pub use link::{Link, LinkTotals, NewLink};
