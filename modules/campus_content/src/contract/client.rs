use async_trait::async_trait;
use uuid::Uuid;

use crate::contract::{
    error::CampusContentError,
    model::{
        ApprovedFilter, ContentItem, ContentKind, NewEvent, NewNote, NewProfile, NewSchool,
        RatingSummary, Report, Role, UserProfile,
    },
};

/// Public API trait for the campus_content module that other modules can
/// use. Every operation takes the resolved caller profile explicitly; there
/// is no ambient "current session" inside the core.
#[async_trait]
pub trait CampusContentApi: Send + Sync {
    // --- identity ---

    /// Resolve an authenticated session id to its stored profile.
    async fn resolve_profile(&self, session_user_id: Uuid)
        -> Result<UserProfile, CampusContentError>;

    /// Register a fresh profile (student, no tenant).
    async fn register_profile(&self, new: NewProfile) -> Result<UserProfile, CampusContentError>;

    // --- submission & listing ---

    /// Submit a note into the pending queue of the caller's tenant.
    async fn submit_note(
        &self,
        caller: &UserProfile,
        new: NewNote,
    ) -> Result<ContentItem, CampusContentError>;

    /// Submit an event into the pending queue of the caller's tenant.
    async fn submit_event(
        &self,
        caller: &UserProfile,
        new: NewEvent,
    ) -> Result<ContentItem, CampusContentError>;

    /// Create a school; auto-approved when an admin creates their one school.
    async fn create_school(
        &self,
        caller: &UserProfile,
        new: NewSchool,
    ) -> Result<ContentItem, CampusContentError>;

    /// Approved notes matching the filter.
    async fn list_approved_notes(
        &self,
        filter: ApprovedFilter,
    ) -> Result<Vec<ContentItem>, CampusContentError>;

    /// Approved events of one tenant, chronological.
    async fn list_approved_events(
        &self,
        university_id: Uuid,
    ) -> Result<Vec<ContentItem>, CampusContentError>;

    /// Moderation queue visible to the caller (tenant-scoped for admins).
    async fn list_pending(
        &self,
        caller: &UserProfile,
        kind: ContentKind,
    ) -> Result<Vec<ContentItem>, CampusContentError>;

    /// The caller's own notes in any non-deleted state.
    async fn list_own_notes(
        &self,
        caller: &UserProfile,
    ) -> Result<Vec<ContentItem>, CampusContentError>;

    /// Count a download and return the file URL of an approved note.
    async fn download_note(
        &self,
        caller: &UserProfile,
        note_id: Uuid,
    ) -> Result<String, CampusContentError>;

    // --- moderation ---

    async fn approve(
        &self,
        caller: &UserProfile,
        content_id: Uuid,
    ) -> Result<ContentItem, CampusContentError>;

    async fn reject(
        &self,
        caller: &UserProfile,
        content_id: Uuid,
        reason: Option<String>,
    ) -> Result<ContentItem, CampusContentError>;

    async fn delete(
        &self,
        caller: &UserProfile,
        content_id: Uuid,
    ) -> Result<ContentItem, CampusContentError>;

    // --- ratings & reports ---

    async fn rate_note(
        &self,
        caller: &UserProfile,
        note_id: Uuid,
        value: u8,
    ) -> Result<(), CampusContentError>;

    async fn note_rating_summary(
        &self,
        note_id: Uuid,
    ) -> Result<RatingSummary, CampusContentError>;

    async fn report_content(
        &self,
        caller: &UserProfile,
        content_id: Uuid,
        kind: ContentKind,
        reason: String,
    ) -> Result<Report, CampusContentError>;

    // --- tenancy ---

    /// Provision a user's tenant/role pair (guarded against escalation).
    async fn assign_university_and_role(
        &self,
        caller: &UserProfile,
        target_user_id: Uuid,
        university_id: Option<Uuid>,
        role: Role,
    ) -> Result<(), CampusContentError>;
}
