pub mod entity;
pub mod mapper;
pub mod repos;

pub use repos::{DocStoreContent, DocStoreProfiles, DocStoreRatings, DocStoreReports};
