pub mod content;
pub mod error;
pub mod events;
pub mod guard;
pub mod moderation;
pub mod ports;
pub mod ratings;
pub mod repo;
pub mod service;
pub mod tenancy;
