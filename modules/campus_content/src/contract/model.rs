use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role attached to a user profile. Moderation is reserved for `Admin`
/// (tenant-scoped) and `SuperAdmin` (global).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Student,
    Admin,
    SuperAdmin,
}

impl Role {
    /// Whether this role may enter the moderation surface at all.
    pub fn is_moderator(self) -> bool {
        matches!(self, Role::Admin | Role::SuperAdmin)
    }
}

/// Stored user profile resolved from an authenticated session id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub role: Role,
    /// Tenant the user belongs to. `None` until onboarding assigns one;
    /// a missing tenant is a valid state, not an error.
    pub university_id: Option<Uuid>,
    pub onboarding_completed: bool,
}

/// Data for registering a new profile. Registration always starts as a
/// student with no tenant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProfile {
    pub full_name: String,
    pub email: String,
}

/// Lifecycle state of a content item. `Pending` is the only non-terminal
/// state; nothing ever re-enters it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentStatus {
    Pending,
    Approved,
    Rejected,
    Deleted,
}

impl ContentStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, ContentStatus::Pending)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Note,
    Event,
    School,
}

/// Stored file reference kind, derived from the uploaded MIME type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    Pdf,
    Image,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NotePayload {
    pub title: String,
    /// Durable URL handed back by the binary object store; the core never
    /// touches the bytes themselves.
    pub file_url: String,
    pub file_kind: FileKind,
    pub file_size: u64,
    pub department_id: Uuid,
    pub level_id: Uuid,
    pub course_id: Uuid,
    pub download_count: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventPayload {
    pub title: String,
    pub description: Option<String>,
    pub venue: Option<String>,
    pub starts_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SchoolPayload {
    pub name: String,
    /// Set when an admin auto-approves their own school; that admin is then
    /// bound to exactly this tenant.
    pub admin_uid: Option<Uuid>,
}

/// Kind-specific payload of a content item.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentPayload {
    Note(NotePayload),
    Event(EventPayload),
    School(SchoolPayload),
}

impl ContentPayload {
    pub fn kind(&self) -> ContentKind {
        match self {
            ContentPayload::Note(_) => ContentKind::Note,
            ContentPayload::Event(_) => ContentKind::Event,
            ContentPayload::School(_) => ContentKind::School,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            ContentPayload::Note(n) => &n.title,
            ContentPayload::Event(e) => &e.title,
            ContentPayload::School(s) => &s.name,
        }
    }
}

/// A moderatable submission: note, event or school.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentItem {
    pub id: Uuid,
    pub kind: ContentKind,
    pub owner_id: Uuid,
    /// Tenant snapshot taken at submission time; later reassignment of the
    /// owner never moves existing content. Schools carry no tenant.
    pub university_id: Option<Uuid>,
    pub status: ContentStatus,
    pub created_at: DateTime<Utc>,
    pub decided_by: Option<Uuid>,
    pub decided_at: Option<DateTime<Utc>>,
    pub rejection_reason: Option<String>,
    pub payload: ContentPayload,
}

/// Data for submitting a new note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub title: String,
    pub file_url: String,
    pub mime_type: String,
    pub file_size: u64,
    pub department_id: Uuid,
    pub level_id: Uuid,
    pub course_id: Uuid,
}

/// Data for submitting a new event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub title: String,
    pub description: Option<String>,
    pub venue: Option<String>,
    pub starts_at: Option<DateTime<Utc>>,
}

/// Data for creating a new school.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSchool {
    pub name: String,
}

/// Equality filter for the approved-notes listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApprovedFilter {
    pub university_id: Option<Uuid>,
    pub course_id: Option<Uuid>,
    pub department_id: Option<Uuid>,
}

/// A single immutable peer rating on an approved note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rating {
    pub note_id: Uuid,
    pub user_id: Uuid,
    pub value: u8,
    pub created_at: DateTime<Utc>,
}

/// Read-side aggregate over all ratings of one note.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingSummary {
    /// Mean rating rounded to one decimal place; 0.0 when unrated.
    pub average: f64,
    pub count: usize,
}

/// Append-only abuse report; reviewed outside this core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub id: Uuid,
    pub reporter_id: Uuid,
    pub content_id: Uuid,
    pub content_kind: ContentKind,
    pub reason: String,
    pub status: ContentStatus,
    pub created_at: DateTime<Utc>,
}
