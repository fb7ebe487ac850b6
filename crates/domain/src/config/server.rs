use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_socket_path")]
    pub socket_path: String,

    /// Also answer the protocol over HTTP (one request per POST).
    #[serde(default)]
    pub http_enabled: bool,

    #[serde(default = "default_http_bind_address")]
    pub http_bind_address: String,

    #[serde(default = "default_http_port")]
    pub http_port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            socket_path: default_socket_path(),
            http_enabled: false,
            http_bind_address: default_http_bind_address(),
            http_port: default_http_port(),
        }
    }
}

fn default_socket_path() -> String {
    "/run/pdns-backend/backend.sock".to_string()
}

fn default_http_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_http_port() -> u16 {
    8053
}
