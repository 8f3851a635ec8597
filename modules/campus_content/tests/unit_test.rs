use chrono::Utc;
use uuid::Uuid;

use campus_content::contract::{error::CampusContentError, model::*};
use campus_content::domain::error::DomainError;

#[test]
fn test_contract_models() {
    let profile = UserProfile {
        id: Uuid::new_v4(),
        full_name: "Test User".to_string(),
        email: "test@example.com".to_string(),
        role: Role::Student,
        university_id: None,
        onboarding_completed: false,
    };

    assert_eq!(profile.email, "test@example.com");
    assert!(!profile.role.is_moderator());
    assert!(Role::Admin.is_moderator());
    assert!(Role::SuperAdmin.is_moderator());

    assert!(!ContentStatus::Pending.is_terminal());
    assert!(ContentStatus::Approved.is_terminal());
    assert!(ContentStatus::Rejected.is_terminal());
    assert!(ContentStatus::Deleted.is_terminal());

    let payload = ContentPayload::School(SchoolPayload {
        name: "Hilltop University".to_string(),
        admin_uid: None,
    });
    assert_eq!(payload.kind(), ContentKind::School);
    assert_eq!(payload.title(), "Hilltop University");
}

#[test]
fn test_contract_errors() {
    let id = Uuid::new_v4();
    let error = CampusContentError::not_found(id);
    assert_eq!(error, CampusContentError::NotFound { id });

    let error = CampusContentError::validation("file too large");
    match error {
        CampusContentError::Validation { message } => {
            assert_eq!(message, "file too large");
        }
        _ => panic!("Expected Validation error"),
    }

    let error = CampusContentError::invalid_transition(ContentStatus::Approved);
    assert_eq!(
        error,
        CampusContentError::InvalidTransition {
            status: ContentStatus::Approved
        }
    );

    assert_eq!(CampusContentError::unauthorized(), CampusContentError::Unauthorized);
    assert_eq!(CampusContentError::internal(), CampusContentError::Internal);
}

#[test]
fn test_domain_error_mapping() {
    let id = Uuid::new_v4();

    let err: CampusContentError = DomainError::profile_not_found(id).into();
    assert_eq!(err, CampusContentError::NotFound { id });

    let err: CampusContentError = DomainError::content_not_found(id).into();
    assert_eq!(err, CampusContentError::NotFound { id });

    let err: CampusContentError = DomainError::unauthorized("moderate").into();
    assert_eq!(err, CampusContentError::Unauthorized);

    let err: CampusContentError =
        DomainError::invalid_transition(ContentStatus::Deleted, "approve").into();
    assert_eq!(
        err,
        CampusContentError::InvalidTransition {
            status: ContentStatus::Deleted
        }
    );

    let err: CampusContentError = DomainError::already_rated(id, Uuid::new_v4()).into();
    assert_eq!(err, CampusContentError::AlreadyRated);

    let err: CampusContentError = DomainError::already_owns_tenant(id).into();
    assert_eq!(err, CampusContentError::AlreadyOwnsTenant);

    let err: CampusContentError = DomainError::missing_field("title").into();
    assert!(matches!(err, CampusContentError::Validation { .. }));

    let err: CampusContentError = DomainError::database("connection reset").into();
    assert_eq!(err, CampusContentError::Internal);
}

#[test]
fn test_campus_content_config() {
    use campus_content::config::CampusContentConfig;

    let config = CampusContentConfig::default();
    assert_eq!(config.max_note_file_bytes, 10 * 1024 * 1024);
    assert_eq!(config.max_title_length, 200);

    let json_config = r#"{"max_note_file_bytes": 1048576, "max_title_length": 80}"#;
    let config: CampusContentConfig =
        serde_json::from_str(json_config).expect("Should deserialize");
    assert_eq!(config.max_note_file_bytes, 1_048_576);
    assert_eq!(config.max_title_length, 80);

    let partial: CampusContentConfig = serde_json::from_str("{}").expect("Should deserialize");
    assert_eq!(partial.max_note_file_bytes, 10 * 1024 * 1024);
}

#[test]
fn test_storage_mapping_roundtrip() {
    use campus_content::infra::storage::mapper::{content_to_doc, doc_to_content};

    let id = Uuid::new_v4();
    let item = ContentItem {
        id,
        kind: ContentKind::Note,
        owner_id: Uuid::new_v4(),
        university_id: Some(Uuid::new_v4()),
        status: ContentStatus::Pending,
        created_at: Utc::now(),
        decided_by: None,
        decided_at: None,
        rejection_reason: None,
        payload: ContentPayload::Note(NotePayload {
            title: "Data structures".to_string(),
            file_url: "https://files.example.com/ds.pdf".to_string(),
            file_kind: FileKind::Pdf,
            file_size: 2048,
            department_id: Uuid::new_v4(),
            level_id: Uuid::new_v4(),
            course_id: Uuid::new_v4(),
            download_count: 7,
        }),
    };

    let roundtripped = doc_to_content(id, content_to_doc(&item)).expect("roundtrip");
    assert_eq!(roundtripped, item);

    let event = ContentItem {
        kind: ContentKind::Event,
        payload: ContentPayload::Event(EventPayload {
            title: "Open day".to_string(),
            description: None,
            venue: None,
            starts_at: Some(Utc::now()),
        }),
        ..item.clone()
    };
    let roundtripped = doc_to_content(id, content_to_doc(&event)).expect("roundtrip");
    assert_eq!(roundtripped, event);

    let school = ContentItem {
        kind: ContentKind::School,
        university_id: None,
        payload: ContentPayload::School(SchoolPayload {
            name: "Hilltop University".to_string(),
            admin_uid: Some(Uuid::new_v4()),
        }),
        ..item
    };
    let roundtripped = doc_to_content(id, content_to_doc(&school)).expect("roundtrip");
    assert_eq!(roundtripped, school);
}

#[test]
fn test_mapping_rejects_malformed_documents() {
    use campus_content::infra::storage::mapper::{content_to_doc, doc_to_content};

    let id = Uuid::new_v4();
    let item = ContentItem {
        id,
        kind: ContentKind::Note,
        owner_id: Uuid::new_v4(),
        university_id: Some(Uuid::new_v4()),
        status: ContentStatus::Pending,
        created_at: Utc::now(),
        decided_by: None,
        decided_at: None,
        rejection_reason: None,
        payload: ContentPayload::Note(NotePayload {
            title: "Broken".to_string(),
            file_url: "https://files.example.com/x.pdf".to_string(),
            file_kind: FileKind::Pdf,
            file_size: 1,
            department_id: Uuid::new_v4(),
            level_id: Uuid::new_v4(),
            course_id: Uuid::new_v4(),
            download_count: 0,
        }),
    };

    let mut doc = content_to_doc(&item);
    doc.file_url = None;
    assert!(doc_to_content(id, doc).is_err());
}
