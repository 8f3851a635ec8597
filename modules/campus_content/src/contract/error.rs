use thiserror::Error;
use uuid::Uuid;

use crate::contract::model::ContentStatus;

/// Errors that are safe to expose to other modules. Every core failure is
/// distinguishable by kind so the presentation layer can render an
/// appropriate message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CampusContentError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("not found: {id}")]
    NotFound { id: Uuid },

    #[error("validation error: {message}")]
    Validation { message: String },

    #[error("invalid transition from status '{status:?}'")]
    InvalidTransition { status: ContentStatus },

    #[error("already rated")]
    AlreadyRated,

    #[error("admin already owns a school")]
    AlreadyOwnsTenant,

    #[error("internal error")]
    Internal,
}

impl CampusContentError {
    pub fn unauthorized() -> Self {
        Self::Unauthorized
    }

    pub fn not_found(id: Uuid) -> Self {
        Self::NotFound { id }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn invalid_transition(status: ContentStatus) -> Self {
        Self::InvalidTransition { status }
    }

    pub fn internal() -> Self {
        Self::Internal
    }
}
