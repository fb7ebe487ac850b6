use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    #[serde(default = "default_migrations_path")]
    pub migrations_path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            max_connections: default_max_connections(),
            migrations_path: default_migrations_path(),
        }
    }
}

fn default_db_path() -> String {
    "pdns-backend.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_migrations_path() -> String {
    "./migrations".to_string()
}
