use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Zone [{0}] Not Found")]
    ZoneNotFound(String),

    #[error("Zone [{0}] Has No Name Servers")]
    ZoneHasNoNameServers(String),

    #[error("Invalid Request: {0}")]
    InvalidRequest(String),

    #[error("Invalid Parameters for [{method}]: {reason}")]
    InvalidParameters { method: String, reason: String },

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache entry [{0}] expired")]
    CacheExpired(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Suffix table unavailable: {0}")]
    SuffixTableUnavailable(String),

    #[error("Suffix list fetch error: {0}")]
    SuffixListFetch(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

impl DomainError {
    pub fn is_cache_expired(&self) -> bool {
        matches!(self, DomainError::CacheExpired(_))
    }
}
