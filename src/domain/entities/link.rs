//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A stored short link with its usage counters.
///
/// `created_at` is assigned by the store on insert and never changes.
/// `clicks` only ever grows, one step per successful redirect.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Link {
    pub id: i64,
    pub code: String,
    pub url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    pub last_clicked: Option<DateTime<Utc>>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        code: String,
        url: String,
        clicks: i64,
        created_at: DateTime<Utc>,
        last_clicked: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            code,
            url,
            clicks,
            created_at,
            last_clicked,
        }
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLink {
    pub code: String,
    pub url: String,
}

/// Totals across the whole link table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct LinkTotals {
    pub links: i64,
    pub clicks: i64,
}
