//! Conversions between storage documents and contract models.

use anyhow::{bail, Context};
use uuid::Uuid;

use crate::contract::model::{
    ContentItem, ContentKind, ContentPayload, EventPayload, NotePayload, Rating, Report,
    SchoolPayload, UserProfile,
};
use crate::infra::storage::entity::{ContentDoc, ProfileDoc, RatingDoc, ReportDoc};

pub fn profile_to_doc(profile: &UserProfile) -> ProfileDoc {
    ProfileDoc {
        full_name: profile.full_name.clone(),
        email: profile.email.clone(),
        role: profile.role,
        university_id: profile.university_id,
        onboarding_completed: profile.onboarding_completed,
    }
}

pub fn doc_to_profile(id: Uuid, doc: ProfileDoc) -> UserProfile {
    UserProfile {
        id,
        full_name: doc.full_name,
        email: doc.email,
        role: doc.role,
        university_id: doc.university_id,
        onboarding_completed: doc.onboarding_completed,
    }
}

pub fn content_to_doc(item: &ContentItem) -> ContentDoc {
    let mut doc = ContentDoc {
        kind: item.kind,
        owner_id: item.owner_id,
        university_id: item.university_id,
        status: item.status,
        created_at: item.created_at,
        decided_by: item.decided_by,
        decided_at: item.decided_at,
        rejection_reason: item.rejection_reason.clone(),
        title: None,
        file_url: None,
        file_kind: None,
        file_size: None,
        department_id: None,
        level_id: None,
        course_id: None,
        download_count: None,
        description: None,
        venue: None,
        starts_at: None,
        name: None,
        admin_uid: None,
    };
    match &item.payload {
        ContentPayload::Note(note) => {
            doc.title = Some(note.title.clone());
            doc.file_url = Some(note.file_url.clone());
            doc.file_kind = Some(note.file_kind);
            doc.file_size = Some(note.file_size);
            doc.department_id = Some(note.department_id);
            doc.level_id = Some(note.level_id);
            doc.course_id = Some(note.course_id);
            doc.download_count = Some(note.download_count);
        }
        ContentPayload::Event(event) => {
            doc.title = Some(event.title.clone());
            doc.description = event.description.clone();
            doc.venue = event.venue.clone();
            doc.starts_at = event.starts_at;
        }
        ContentPayload::School(school) => {
            doc.name = Some(school.name.clone());
            doc.admin_uid = school.admin_uid;
        }
    }
    doc
}

pub fn doc_to_content(id: Uuid, doc: ContentDoc) -> anyhow::Result<ContentItem> {
    let payload = match doc.kind {
        ContentKind::Note => ContentPayload::Note(NotePayload {
            title: doc.title.with_context(|| missing(id, "title"))?,
            file_url: doc.file_url.with_context(|| missing(id, "file_url"))?,
            file_kind: doc.file_kind.with_context(|| missing(id, "file_kind"))?,
            file_size: doc.file_size.with_context(|| missing(id, "file_size"))?,
            department_id: doc
                .department_id
                .with_context(|| missing(id, "department_id"))?,
            level_id: doc.level_id.with_context(|| missing(id, "level_id"))?,
            course_id: doc.course_id.with_context(|| missing(id, "course_id"))?,
            download_count: doc.download_count.unwrap_or(0),
        }),
        ContentKind::Event => ContentPayload::Event(EventPayload {
            title: doc.title.with_context(|| missing(id, "title"))?,
            description: doc.description,
            venue: doc.venue,
            starts_at: doc.starts_at,
        }),
        ContentKind::School => ContentPayload::School(SchoolPayload {
            name: doc.name.with_context(|| missing(id, "name"))?,
            admin_uid: doc.admin_uid,
        }),
    };

    Ok(ContentItem {
        id,
        kind: doc.kind,
        owner_id: doc.owner_id,
        university_id: doc.university_id,
        status: doc.status,
        created_at: doc.created_at,
        decided_by: doc.decided_by,
        decided_at: doc.decided_at,
        rejection_reason: doc.rejection_reason,
        payload,
    })
}

pub fn rating_to_doc(rating: &Rating) -> RatingDoc {
    RatingDoc {
        note_id: rating.note_id,
        user_id: rating.user_id,
        value: rating.value,
        created_at: rating.created_at,
    }
}

pub fn doc_to_rating(doc: RatingDoc) -> anyhow::Result<Rating> {
    if !(1..=5).contains(&doc.value) {
        bail!("stored rating value {} out of range", doc.value);
    }
    Ok(Rating {
        note_id: doc.note_id,
        user_id: doc.user_id,
        value: doc.value,
        created_at: doc.created_at,
    })
}

pub fn report_to_doc(report: &Report) -> ReportDoc {
    ReportDoc {
        reporter_id: report.reporter_id,
        content_id: report.content_id,
        content_kind: report.content_kind,
        reason: report.reason.clone(),
        status: report.status,
        created_at: report.created_at,
    }
}

fn missing(id: Uuid, field: &str) -> String {
    format!("content document {id} is missing required field '{field}'")
}
