use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::config::CampusContentConfig;
use crate::contract::model::{NewProfile, Role, UserProfile};
use crate::domain::error::DomainError;
use crate::domain::events::ContentDomainEvent;
use crate::domain::ports::EventPublisher;
use crate::domain::repo::{
    ContentRepository, ProfileRepository, RatingRepository, ReportRepository,
};

/// Domain service with the business rules of the moderation core.
/// Depends only on the repository ports, not on infra types. Every
/// operation takes the resolved caller profile explicitly.
#[derive(Clone)]
pub struct Service {
    pub(crate) profiles: Arc<dyn ProfileRepository>,
    pub(crate) content: Arc<dyn ContentRepository>,
    pub(crate) ratings: Arc<dyn RatingRepository>,
    pub(crate) reports: Arc<dyn ReportRepository>,
    pub(crate) events: Arc<dyn EventPublisher<ContentDomainEvent>>,
    pub(crate) config: CampusContentConfig,
}

impl Service {
    /// Create a service with dependencies.
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        content: Arc<dyn ContentRepository>,
        ratings: Arc<dyn RatingRepository>,
        reports: Arc<dyn ReportRepository>,
        events: Arc<dyn EventPublisher<ContentDomainEvent>>,
        config: CampusContentConfig,
    ) -> Self {
        Self {
            profiles,
            content,
            ratings,
            reports,
            events,
            config,
        }
    }

    /// Resolve an authenticated session id to its stored profile. A valid
    /// session without a profile document (deleted account) is a hard
    /// error, never defaulted to some empty student.
    #[instrument(name = "campus_content.service.resolve_profile", skip(self), fields(user_id = %session_user_id))]
    pub async fn resolve_profile(&self, session_user_id: Uuid) -> Result<UserProfile, DomainError> {
        debug!("Resolving profile for session");

        let profile = self
            .profiles
            .find_by_id(session_user_id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or_else(|| DomainError::profile_not_found(session_user_id))?;
        debug!("Successfully resolved profile");
        Ok(profile)
    }

    /// Register a fresh profile. Everyone starts as a student with no
    /// tenant; only the tenant assignment service promotes from there.
    #[instrument(
        name = "campus_content.service.register_profile",
        skip(self),
        fields(email = %new.email)
    )]
    pub async fn register_profile(&self, new: NewProfile) -> Result<UserProfile, DomainError> {
        info!("Registering new profile");

        if new.full_name.trim().is_empty() {
            return Err(DomainError::missing_field("full_name"));
        }
        self.validate_email(&new.email)?;

        let profile = UserProfile {
            id: Uuid::new_v4(),
            full_name: new.full_name,
            email: new.email,
            role: Role::Student,
            university_id: None,
            onboarding_completed: false,
        };

        self.profiles
            .insert(profile.clone())
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        info!("Successfully registered profile with id={}", profile.id);
        Ok(profile)
    }

    // --- validation helpers ---

    pub(crate) fn validate_title(&self, field: &'static str, title: &str) -> Result<(), DomainError> {
        if title.trim().is_empty() {
            return Err(DomainError::missing_field(field));
        }
        if title.len() > self.config.max_title_length {
            return Err(DomainError::TitleTooLong {
                len: title.len(),
                max: self.config.max_title_length,
            });
        }
        Ok(())
    }

    fn validate_email(&self, email: &str) -> Result<(), DomainError> {
        if email.is_empty() || !email.contains('@') || !email.contains('.') {
            return Err(DomainError::InvalidEmail {
                email: email.to_string(),
            });
        }
        Ok(())
    }

    /// Timestamp source for every stamp the service writes.
    pub(crate) fn now(&self) -> chrono::DateTime<Utc> {
        Utc::now()
    }
}
