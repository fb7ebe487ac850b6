use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Responsible mailbox published in SOA records; `@` is rendered as `.`.
    #[serde(default = "default_hostmaster")]
    pub hostmaster: String,

    /// Log line returned by the `initialize` handshake.
    #[serde(default = "default_acknowledgement")]
    pub acknowledgement: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            hostmaster: default_hostmaster(),
            acknowledgement: default_acknowledgement(),
        }
    }
}

fn default_hostmaster() -> String {
    "hostmaster@localhost".to_string()
}

fn default_acknowledgement() -> String {
    "PowerDNS Remote Backend Initialized".to_string()
}
