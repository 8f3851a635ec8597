//! Storage-shaped documents. Content items of all kinds share one sparse
//! document layout so the store can filter them with plain field equality;
//! the mapper folds them back into the tagged contract model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::contract::model::{ContentKind, ContentStatus, FileKind, Role};

pub const USERS: &str = "users";
pub const CONTENT: &str = "content";
pub const RATINGS: &str = "ratings";
pub const REPORTS: &str = "reports";

/// Stored user profile; the document id is the profile id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileDoc {
    pub full_name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub university_id: Option<Uuid>,
    pub onboarding_completed: bool,
}

/// Stored content item; the document id is the item id. Kind-specific
/// fields are optional and simply absent for other kinds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentDoc {
    pub kind: ContentKind,
    pub owner_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub university_id: Option<Uuid>,
    pub status: ContentStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decided_by: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decided_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,

    // note fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_kind: Option<FileKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_count: Option<u64>,

    // event fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,

    // school fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_uid: Option<Uuid>,
}

/// Stored rating; append-only, one per `(note_id, user_id)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingDoc {
    pub note_id: Uuid,
    pub user_id: Uuid,
    pub value: u8,
    pub created_at: DateTime<Utc>,
}

/// Stored abuse report; the document id is the report id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportDoc {
    pub reporter_id: Uuid,
    pub content_id: Uuid,
    pub content_kind: ContentKind,
    pub reason: String,
    pub status: ContentStatus,
    pub created_at: DateTime<Utc>,
}
