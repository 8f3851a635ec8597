//! Ports for the domain layer: persistence operations the domain needs.
//! Object-safe and async-friendly via `async_trait`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::contract::model::{
    ApprovedFilter, ContentItem, ContentKind, ContentStatus, Rating, Report, Role, UserProfile,
};
use crate::domain::guard::ScopeFilter;

/// Moderation decision to persist on a content item.
#[derive(Debug, Clone)]
pub struct Decision {
    pub status: ContentStatus,
    pub decided_by: Option<Uuid>,
    pub decided_at: DateTime<Utc>,
    /// Written only when present (reject carries a nullable reason).
    pub rejection_reason: Option<String>,
}

/// Result of a compare-and-swap decision write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionOutcome {
    Applied,
    /// The document no longer holds the expected status; the actual one is
    /// returned so the caller can report the losing transition precisely.
    StatusMismatch(ContentStatus),
    NotFound,
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Load a profile by id.
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<UserProfile>>;
    /// Insert a fully-formed profile.
    ///
    /// Service computes id/defaults; repo persists.
    async fn insert(&self, profile: UserProfile) -> anyhow::Result<()>;
    /// Overwrite the tenant/role pair. Returns false when no such profile
    /// exists.
    async fn set_university_and_role(
        &self,
        id: Uuid,
        university_id: Option<Uuid>,
        role: Role,
    ) -> anyhow::Result<bool>;
}

#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn insert(&self, item: ContentItem) -> anyhow::Result<()>;
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<ContentItem>>;
    /// Pending items of one kind, restricted by the guard's scope.
    async fn list_pending(
        &self,
        kind: ContentKind,
        scope: ScopeFilter,
    ) -> anyhow::Result<Vec<ContentItem>>;
    async fn list_approved_notes(
        &self,
        filter: &ApprovedFilter,
    ) -> anyhow::Result<Vec<ContentItem>>;
    /// Approved events of one tenant, ordered by `created_at` ascending.
    async fn list_approved_events(&self, university_id: Uuid)
        -> anyhow::Result<Vec<ContentItem>>;
    /// One owner's items of one kind, deleted ones excluded.
    async fn list_by_owner(
        &self,
        kind: ContentKind,
        owner_id: Uuid,
    ) -> anyhow::Result<Vec<ContentItem>>;
    /// Apply a moderation decision only if the document still holds
    /// `expected`; the store serializes writes per document, so two racing
    /// moderators cannot both win.
    async fn apply_decision(
        &self,
        id: Uuid,
        expected: ContentStatus,
        decision: Decision,
    ) -> anyhow::Result<DecisionOutcome>;
    /// Atomic counter bump on a note document.
    async fn increment_download_count(&self, id: Uuid) -> anyhow::Result<()>;
    /// Whether this admin already has a school bound to them.
    async fn admin_owns_school(&self, admin_id: Uuid) -> anyhow::Result<bool>;
}

#[async_trait]
pub trait RatingRepository: Send + Sync {
    async fn find(&self, note_id: Uuid, user_id: Uuid) -> anyhow::Result<Option<Rating>>;
    async fn insert(&self, rating: Rating) -> anyhow::Result<()>;
    async fn list_for_note(&self, note_id: Uuid) -> anyhow::Result<Vec<Rating>>;
}

#[async_trait]
pub trait ReportRepository: Send + Sync {
    async fn insert(&self, report: Report) -> anyhow::Result<()>;
}
