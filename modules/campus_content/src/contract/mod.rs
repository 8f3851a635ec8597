pub mod client;
pub mod error;
pub mod model;

pub use client::CampusContentApi;
pub use error::CampusContentError;
pub use model::{
    ApprovedFilter, ContentItem, ContentKind, ContentPayload, ContentStatus, EventPayload,
    FileKind, NewEvent, NewNote, NewProfile, NewSchool, NotePayload, Rating, RatingSummary,
    Report, Role, SchoolPayload, UserProfile,
};
