use thiserror::Error;
use uuid::Uuid;

use crate::contract::error::CampusContentError;
use crate::contract::model::ContentStatus;

/// Domain-specific errors using thiserror. These carry the detail the
/// service layer logs; the contract error is the flattened public view.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("profile not found: {id}")]
    ProfileNotFound { id: Uuid },

    #[error("content not found: {id}")]
    ContentNotFound { id: Uuid },

    #[error("caller is not authorized for '{action}'")]
    Unauthorized { action: String },

    #[error("cannot {event} content in status '{status:?}'")]
    InvalidTransition {
        status: ContentStatus,
        event: &'static str,
    },

    #[error("user {user_id} already rated note {note_id}")]
    AlreadyRated { note_id: Uuid, user_id: Uuid },

    #[error("admin {admin_id} already owns a school")]
    AlreadyOwnsTenant { admin_id: Uuid },

    #[error("required field '{field}' is missing or empty")]
    MissingField { field: &'static str },

    #[error("invalid email format: '{email}'")]
    InvalidEmail { email: String },

    #[error("title too long: {len} characters (max: {max})")]
    TitleTooLong { len: usize, max: usize },

    #[error("file too large: {size} bytes (max: {max})")]
    FileTooLarge { size: u64, max: u64 },

    #[error("unsupported media type: '{mime}'")]
    UnsupportedMediaType { mime: String },

    #[error("rating {value} outside allowed range 1..=5")]
    RatingOutOfRange { value: u8 },

    #[error("database error: {message}")]
    Database { message: String },
}

impl DomainError {
    pub fn profile_not_found(id: Uuid) -> Self {
        Self::ProfileNotFound { id }
    }

    pub fn content_not_found(id: Uuid) -> Self {
        Self::ContentNotFound { id }
    }

    pub fn unauthorized(action: impl Into<String>) -> Self {
        Self::Unauthorized {
            action: action.into(),
        }
    }

    pub fn invalid_transition(status: ContentStatus, event: &'static str) -> Self {
        Self::InvalidTransition { status, event }
    }

    pub fn already_rated(note_id: Uuid, user_id: Uuid) -> Self {
        Self::AlreadyRated { note_id, user_id }
    }

    pub fn already_owns_tenant(admin_id: Uuid) -> Self {
        Self::AlreadyOwnsTenant { admin_id }
    }

    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}

impl From<DomainError> for CampusContentError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::ProfileNotFound { id } | DomainError::ContentNotFound { id } => {
                CampusContentError::NotFound { id }
            }
            DomainError::Unauthorized { .. } => CampusContentError::Unauthorized,
            DomainError::InvalidTransition { status, .. } => {
                CampusContentError::InvalidTransition { status }
            }
            DomainError::AlreadyRated { .. } => CampusContentError::AlreadyRated,
            DomainError::AlreadyOwnsTenant { .. } => CampusContentError::AlreadyOwnsTenant,
            DomainError::MissingField { .. }
            | DomainError::InvalidEmail { .. }
            | DomainError::TitleTooLong { .. }
            | DomainError::FileTooLarge { .. }
            | DomainError::UnsupportedMediaType { .. }
            | DomainError::RatingOutOfRange { .. } => {
                CampusContentError::Validation {
                    message: err.to_string(),
                }
            }
            DomainError::Database { .. } => CampusContentError::Internal,
        }
    }
}
