use serde::{Deserialize, Serialize};

/// Configuration for the campus_content module
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CampusContentConfig {
    /// Upper bound for uploaded note files, in bytes.
    #[serde(default = "default_max_note_file_bytes")]
    pub max_note_file_bytes: u64,
    #[serde(default = "default_max_title_length")]
    pub max_title_length: usize,
}

impl Default for CampusContentConfig {
    fn default() -> Self {
        Self {
            max_note_file_bytes: default_max_note_file_bytes(),
            max_title_length: default_max_title_length(),
        }
    }
}

fn default_max_note_file_bytes() -> u64 {
    10 * 1024 * 1024
}

fn default_max_title_length() -> usize {
    200
}
