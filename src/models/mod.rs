use chrono::{DateTime, Utc};

/// A row of the `memo` table. `deleted_at` marks soft deletion; no
/// current endpoint sets or filters on it.
#[derive(Debug, Clone)]
pub struct Memo {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
}
