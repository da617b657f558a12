use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Memo;

/// Uniform response envelope: `{"message": ..., "data": ...}`.
/// Error responses carry `data: null`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// "success" or an error description
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            message: "success".to_string(),
            data: Some(data),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MemoResponse {
    /// Memo ID
    pub id: i64,
    /// Memo title
    pub title: String,
    /// Memo content
    pub content: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Memo> for MemoResponse {
    fn from(memo: Memo) -> Self {
        Self {
            id: memo.id,
            title: memo.title,
            content: memo.content,
            created_at: memo.created_at,
            updated_at: memo.updated_at,
            deleted_at: memo.deleted_at,
        }
    }
}

/// Create payload. Both fields default to empty so a missing `content`
/// reaches the usecase as a validation failure, not a decode failure.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateMemoRequest {
    /// Memo title
    #[serde(default)]
    pub title: String,
    /// Memo content, must be non-empty
    #[serde(default)]
    pub content: String,
}
