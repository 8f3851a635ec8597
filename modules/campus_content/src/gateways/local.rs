use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::contract::{
    client::CampusContentApi,
    error::CampusContentError,
    model::{
        ApprovedFilter, ContentItem, ContentKind, NewEvent, NewNote, NewProfile, NewSchool,
        RatingSummary, Report, Role, UserProfile,
    },
};
use crate::domain::service::Service;

/// Local implementation of the CampusContentApi trait that delegates to
/// the domain service.
pub struct CampusContentLocalClient {
    service: Arc<Service>,
}

impl CampusContentLocalClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl CampusContentApi for CampusContentLocalClient {
    async fn resolve_profile(
        &self,
        session_user_id: Uuid,
    ) -> Result<UserProfile, CampusContentError> {
        self.service
            .resolve_profile(session_user_id)
            .await
            .map_err(Into::into)
    }

    async fn register_profile(&self, new: NewProfile) -> Result<UserProfile, CampusContentError> {
        self.service.register_profile(new).await.map_err(Into::into)
    }

    async fn submit_note(
        &self,
        caller: &UserProfile,
        new: NewNote,
    ) -> Result<ContentItem, CampusContentError> {
        self.service
            .submit_note(caller, new)
            .await
            .map_err(Into::into)
    }

    async fn submit_event(
        &self,
        caller: &UserProfile,
        new: NewEvent,
    ) -> Result<ContentItem, CampusContentError> {
        self.service
            .submit_event(caller, new)
            .await
            .map_err(Into::into)
    }

    async fn create_school(
        &self,
        caller: &UserProfile,
        new: NewSchool,
    ) -> Result<ContentItem, CampusContentError> {
        self.service
            .create_school(caller, new)
            .await
            .map_err(Into::into)
    }

    async fn list_approved_notes(
        &self,
        filter: ApprovedFilter,
    ) -> Result<Vec<ContentItem>, CampusContentError> {
        self.service
            .list_approved_notes(filter)
            .await
            .map_err(Into::into)
    }

    async fn list_approved_events(
        &self,
        university_id: Uuid,
    ) -> Result<Vec<ContentItem>, CampusContentError> {
        self.service
            .list_approved_events(university_id)
            .await
            .map_err(Into::into)
    }

    async fn list_pending(
        &self,
        caller: &UserProfile,
        kind: ContentKind,
    ) -> Result<Vec<ContentItem>, CampusContentError> {
        self.service
            .list_pending(caller, kind)
            .await
            .map_err(Into::into)
    }

    async fn list_own_notes(
        &self,
        caller: &UserProfile,
    ) -> Result<Vec<ContentItem>, CampusContentError> {
        self.service.list_own_notes(caller).await.map_err(Into::into)
    }

    async fn download_note(
        &self,
        caller: &UserProfile,
        note_id: Uuid,
    ) -> Result<String, CampusContentError> {
        self.service
            .download_note(caller, note_id)
            .await
            .map_err(Into::into)
    }

    async fn approve(
        &self,
        caller: &UserProfile,
        content_id: Uuid,
    ) -> Result<ContentItem, CampusContentError> {
        self.service
            .approve(caller, content_id)
            .await
            .map_err(Into::into)
    }

    async fn reject(
        &self,
        caller: &UserProfile,
        content_id: Uuid,
        reason: Option<String>,
    ) -> Result<ContentItem, CampusContentError> {
        self.service
            .reject(caller, content_id, reason)
            .await
            .map_err(Into::into)
    }

    async fn delete(
        &self,
        caller: &UserProfile,
        content_id: Uuid,
    ) -> Result<ContentItem, CampusContentError> {
        self.service
            .delete(caller, content_id)
            .await
            .map_err(Into::into)
    }

    async fn rate_note(
        &self,
        caller: &UserProfile,
        note_id: Uuid,
        value: u8,
    ) -> Result<(), CampusContentError> {
        self.service
            .rate_note(caller, note_id, value)
            .await
            .map_err(Into::into)
    }

    async fn note_rating_summary(
        &self,
        note_id: Uuid,
    ) -> Result<RatingSummary, CampusContentError> {
        self.service
            .note_rating_summary(note_id)
            .await
            .map_err(Into::into)
    }

    async fn report_content(
        &self,
        caller: &UserProfile,
        content_id: Uuid,
        kind: ContentKind,
        reason: String,
    ) -> Result<Report, CampusContentError> {
        self.service
            .report_content(caller, content_id, kind, reason)
            .await
            .map_err(Into::into)
    }

    async fn assign_university_and_role(
        &self,
        caller: &UserProfile,
        target_user_id: Uuid,
        university_id: Option<Uuid>,
        role: Role,
    ) -> Result<(), CampusContentError> {
        self.service
            .assign_university_and_role(caller, target_user_id, university_id, role)
            .await
            .map_err(Into::into)
    }
}
