//! Submission and listing operations of the content repository.

use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::contract::model::{
    ApprovedFilter, ContentItem, ContentKind, ContentPayload, ContentStatus, EventPayload,
    FileKind, NewEvent, NewNote, NewSchool, NotePayload, Role, SchoolPayload, UserProfile,
};
use crate::domain::error::DomainError;
use crate::domain::events::ContentDomainEvent;
use crate::domain::guard::{authorize, Action};
use crate::domain::service::Service;

/// MIME types the binary object store accepts for notes.
const ALLOWED_MIME_TYPES: [&str; 4] = [
    "application/pdf",
    "image/jpeg",
    "image/png",
    "image/jpg",
];

impl Service {
    /// Submit a note into the pending queue. The caller's tenant is
    /// snapshotted onto the item and never moves afterwards.
    #[instrument(
        name = "campus_content.service.submit_note",
        skip(self, caller, new),
        fields(owner_id = %caller.id, title = %new.title)
    )]
    pub async fn submit_note(
        &self,
        caller: &UserProfile,
        new: NewNote,
    ) -> Result<ContentItem, DomainError> {
        info!("Submitting note");

        self.validate_title("title", &new.title)?;
        if new.file_url.trim().is_empty() {
            return Err(DomainError::missing_field("file_url"));
        }
        if new.file_size > self.config.max_note_file_bytes {
            return Err(DomainError::FileTooLarge {
                size: new.file_size,
                max: self.config.max_note_file_bytes,
            });
        }
        if !ALLOWED_MIME_TYPES.contains(&new.mime_type.as_str()) {
            return Err(DomainError::UnsupportedMediaType {
                mime: new.mime_type,
            });
        }
        let university_id = caller
            .university_id
            .ok_or_else(|| DomainError::missing_field("university_id"))?;

        let file_kind = if new.mime_type.starts_with("image/") {
            FileKind::Image
        } else {
            FileKind::Pdf
        };

        let item = ContentItem {
            id: Uuid::new_v4(),
            kind: ContentKind::Note,
            owner_id: caller.id,
            university_id: Some(university_id),
            status: ContentStatus::Pending,
            created_at: self.now(),
            decided_by: None,
            decided_at: None,
            rejection_reason: None,
            payload: ContentPayload::Note(NotePayload {
                title: new.title,
                file_url: new.file_url,
                file_kind,
                file_size: new.file_size,
                department_id: new.department_id,
                level_id: new.level_id,
                course_id: new.course_id,
                download_count: 0,
            }),
        };

        self.insert_submission(item).await
    }

    /// Submit an event into the pending queue of the caller's tenant.
    #[instrument(
        name = "campus_content.service.submit_event",
        skip(self, caller, new),
        fields(owner_id = %caller.id, title = %new.title)
    )]
    pub async fn submit_event(
        &self,
        caller: &UserProfile,
        new: NewEvent,
    ) -> Result<ContentItem, DomainError> {
        info!("Submitting event");

        self.validate_title("title", &new.title)?;
        let university_id = caller
            .university_id
            .ok_or_else(|| DomainError::missing_field("university_id"))?;

        let item = ContentItem {
            id: Uuid::new_v4(),
            kind: ContentKind::Event,
            owner_id: caller.id,
            university_id: Some(university_id),
            status: ContentStatus::Pending,
            created_at: self.now(),
            decided_by: None,
            decided_at: None,
            rejection_reason: None,
            payload: ContentPayload::Event(EventPayload {
                title: new.title,
                description: new.description,
                venue: new.venue,
                starts_at: new.starts_at,
            }),
        };

        self.insert_submission(item).await
    }

    /// Create a school. An admin's first school is auto-approved and bound
    /// to them as their exactly-one tenant; a super admin's school starts
    /// pending like any other submission.
    #[instrument(
        name = "campus_content.service.create_school",
        skip(self, caller, new),
        fields(owner_id = %caller.id, name = %new.name)
    )]
    pub async fn create_school(
        &self,
        caller: &UserProfile,
        new: NewSchool,
    ) -> Result<ContentItem, DomainError> {
        info!("Creating school");

        self.validate_title("name", &new.name)?;

        let already_owns = if caller.role == Role::Admin {
            self.content
                .admin_owns_school(caller.id)
                .await
                .map_err(|e| DomainError::database(e.to_string()))?
        } else {
            false
        };
        authorize(caller, Action::CreateSchool { already_owns })?;

        let auto_approved = caller.role == Role::Admin;
        let item = ContentItem {
            id: Uuid::new_v4(),
            kind: ContentKind::School,
            owner_id: caller.id,
            university_id: None,
            status: if auto_approved {
                ContentStatus::Approved
            } else {
                ContentStatus::Pending
            },
            created_at: self.now(),
            decided_by: None,
            decided_at: None,
            rejection_reason: None,
            payload: ContentPayload::School(SchoolPayload {
                name: new.name,
                admin_uid: auto_approved.then_some(caller.id),
            }),
        };

        if auto_approved {
            debug!("Auto-approving school for admin {}", caller.id);
        }
        self.insert_submission(item).await
    }

    /// Approved notes matching the filter; order unspecified.
    #[instrument(name = "campus_content.service.list_approved_notes", skip(self, filter))]
    pub async fn list_approved_notes(
        &self,
        filter: ApprovedFilter,
    ) -> Result<Vec<ContentItem>, DomainError> {
        let items = self
            .content
            .list_approved_notes(&filter)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;
        debug!("Listed {} approved notes", items.len());
        Ok(items)
    }

    /// Approved events of one tenant, chronological.
    #[instrument(name = "campus_content.service.list_approved_events", skip(self))]
    pub async fn list_approved_events(
        &self,
        university_id: Uuid,
    ) -> Result<Vec<ContentItem>, DomainError> {
        let items = self
            .content
            .list_approved_events(university_id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;
        debug!("Listed {} approved events", items.len());
        Ok(items)
    }

    /// The moderation queue visible to the caller: tenant-scoped for
    /// admins, global for super admins.
    #[instrument(
        name = "campus_content.service.list_pending",
        skip(self, caller),
        fields(caller_id = %caller.id)
    )]
    pub async fn list_pending(
        &self,
        caller: &UserProfile,
        kind: ContentKind,
    ) -> Result<Vec<ContentItem>, DomainError> {
        let scope = authorize(caller, Action::ViewPendingQueue)?;
        let items = self
            .content
            .list_pending(kind, scope)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;
        debug!("Listed {} pending items", items.len());
        Ok(items)
    }

    /// All of the caller's own notes, whatever their moderation outcome
    /// (soft-deleted ones stay hidden).
    #[instrument(
        name = "campus_content.service.list_own_notes",
        skip(self, caller),
        fields(caller_id = %caller.id)
    )]
    pub async fn list_own_notes(
        &self,
        caller: &UserProfile,
    ) -> Result<Vec<ContentItem>, DomainError> {
        self.content
            .list_by_owner(ContentKind::Note, caller.id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))
    }

    /// Count a download and hand back the stored file URL. Only approved
    /// notes are visible to downloaders.
    #[instrument(
        name = "campus_content.service.download_note",
        skip(self, caller),
        fields(caller_id = %caller.id, note_id = %note_id)
    )]
    pub async fn download_note(
        &self,
        caller: &UserProfile,
        note_id: Uuid,
    ) -> Result<String, DomainError> {
        let item = self.visible_note(note_id).await?;
        let ContentPayload::Note(note) = item.payload else {
            return Err(DomainError::content_not_found(note_id));
        };

        self.content
            .increment_download_count(note_id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        debug!("Counted download for note");
        Ok(note.file_url)
    }

    /// Load a note that is visible to ordinary users, i.e. approved. A
    /// pending or rejected note is indistinguishable from a missing one.
    pub(crate) async fn visible_note(&self, note_id: Uuid) -> Result<ContentItem, DomainError> {
        let item = self
            .content
            .find_by_id(note_id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or_else(|| DomainError::content_not_found(note_id))?;
        if item.kind != ContentKind::Note || item.status != ContentStatus::Approved {
            warn!("Note {} not visible (status {:?})", note_id, item.status);
            return Err(DomainError::content_not_found(note_id));
        }
        Ok(item)
    }

    async fn insert_submission(&self, item: ContentItem) -> Result<ContentItem, DomainError> {
        self.content
            .insert(item.clone())
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        self.events.publish(&ContentDomainEvent::Submitted {
            id: item.id,
            kind: item.kind,
            at: item.created_at,
        });

        info!("Stored {:?} submission with id={}", item.kind, item.id);
        Ok(item)
    }
}
