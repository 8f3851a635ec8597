//! Shared harness: a domain Service wired to document-store-backed
//! repositories over a fresh in-memory store per test.

use std::sync::Arc;

use uuid::Uuid;

use campus_content::config::CampusContentConfig;
use campus_content::contract::client::CampusContentApi;
use campus_content::contract::model::{NewEvent, NewNote, Role, UserProfile};
use campus_content::domain::ports::NoopPublisher;
use campus_content::domain::repo::ProfileRepository;
use campus_content::domain::service::Service;
use campus_content::gateways::local::CampusContentLocalClient;
use campus_content::infra::storage::{
    DocStoreContent, DocStoreProfiles, DocStoreRatings, DocStoreReports,
};
use docstore::MemStore;

pub struct TestEnv {
    pub service: Arc<Service>,
    pub client: Arc<dyn CampusContentApi>,
    profiles: Arc<DocStoreProfiles>,
}

/// Build the domain Service with document-store-backed repositories.
pub fn create_test_env() -> TestEnv {
    let store: Arc<dyn docstore::DocumentStore> = Arc::new(MemStore::new());
    let profiles = Arc::new(DocStoreProfiles::new(store.clone()));
    let service = Arc::new(Service::new(
        profiles.clone(),
        Arc::new(DocStoreContent::new(store.clone())),
        Arc::new(DocStoreRatings::new(store.clone())),
        Arc::new(DocStoreReports::new(store)),
        Arc::new(NoopPublisher),
        CampusContentConfig::default(),
    ));
    let client = Arc::new(CampusContentLocalClient::new(service.clone()));
    TestEnv {
        service,
        client,
        profiles,
    }
}

impl TestEnv {
    /// Seed a profile directly through the repository, bypassing the
    /// registration defaults so tests can mint moderators.
    pub async fn seed_profile(&self, role: Role, university_id: Option<Uuid>) -> UserProfile {
        let profile = UserProfile {
            id: Uuid::new_v4(),
            full_name: "Seeded User".to_string(),
            email: format!("{}@example.com", Uuid::new_v4()),
            role,
            university_id,
            onboarding_completed: true,
        };
        self.profiles
            .insert(profile.clone())
            .await
            .expect("seed profile");
        profile
    }

    pub async fn seed_student(&self, university_id: Uuid) -> UserProfile {
        self.seed_profile(Role::Student, Some(university_id)).await
    }

    pub async fn seed_admin(&self, university_id: Uuid) -> UserProfile {
        self.seed_profile(Role::Admin, Some(university_id)).await
    }

    pub async fn seed_super_admin(&self) -> UserProfile {
        self.seed_profile(Role::SuperAdmin, None).await
    }
}

pub fn sample_note(title: &str) -> NewNote {
    NewNote {
        title: title.to_string(),
        file_url: "https://files.example.com/notes/abc123.pdf".to_string(),
        mime_type: "application/pdf".to_string(),
        file_size: 512 * 1024,
        department_id: Uuid::new_v4(),
        level_id: Uuid::new_v4(),
        course_id: Uuid::new_v4(),
    }
}

pub fn sample_event(title: &str) -> NewEvent {
    NewEvent {
        title: title.to_string(),
        description: Some("Orientation for first years".to_string()),
        venue: Some("Main hall".to_string()),
        starts_at: None,
    }
}
