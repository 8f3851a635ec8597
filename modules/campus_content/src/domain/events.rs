use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::contract::model::ContentKind;

/// Transport-agnostic domain event.
#[derive(Debug, Clone)]
pub enum ContentDomainEvent {
    Submitted {
        id: Uuid,
        kind: ContentKind,
        at: DateTime<Utc>,
    },
    Approved {
        id: Uuid,
        by: Uuid,
        at: DateTime<Utc>,
    },
    Rejected {
        id: Uuid,
        by: Uuid,
        at: DateTime<Utc>,
    },
    Deleted {
        id: Uuid,
        by: Uuid,
        at: DateTime<Utc>,
    },
}
