pub mod local;

pub use local::CampusContentLocalClient;
