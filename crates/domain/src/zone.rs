use crate::DomainError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_REFRESH: u32 = 10800;
pub const DEFAULT_RETRY: u32 = 3600;
pub const DEFAULT_EXPIRE: u32 = 604800;
pub const DEFAULT_TTL: u32 = 1800;

/// A registrable domain this backend is authoritative for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub id: i64,
    pub name: String,
    pub name_servers: Vec<String>,
    pub serial: i64,
    pub refresh: u32,
    pub retry: u32,
    pub expire: u32,
    pub ttl: u32,
    pub user_id: Option<i64>,
    pub is_active: bool,
    pub is_public: bool,
}

impl Zone {
    pub fn new(id: i64, name: &str, name_servers: Vec<String>, serial: i64) -> Self {
        Self {
            id,
            name: Self::normalize_name(name),
            name_servers: name_servers
                .into_iter()
                .map(|ns| ns.trim().to_lowercase())
                .collect(),
            serial,
            refresh: DEFAULT_REFRESH,
            retry: DEFAULT_RETRY,
            expire: DEFAULT_EXPIRE,
            ttl: DEFAULT_TTL,
            user_id: None,
            is_active: true,
            is_public: false,
        }
    }

    pub fn with_user(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Lower-case, without the trailing root dot.
    pub fn normalize_name(name: &str) -> String {
        name.trim().trim_end_matches('.').to_lowercase()
    }

    pub fn primary_name_server(&self) -> Result<&str, DomainError> {
        self.name_servers
            .first()
            .map(String::as_str)
            .ok_or_else(|| DomainError::ZoneHasNoNameServers(self.name.clone()))
    }
}
