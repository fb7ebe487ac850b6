use chrono::{DateTime, SecondsFormat, Utc};
use dashmap::DashMap;
use serde_json::{json, Map, Value};
use tokio_util::sync::CancellationToken;

/// One live connection.
#[derive(Debug, Clone)]
pub struct ClientSession {
    pub id: String,
    pub connected_at: DateTime<Utc>,
    close: CancellationToken,
}

impl ClientSession {
    /// Asks the connection task to close its stream.
    pub fn close(&self) {
        self.close.cancel();
    }
}

/// Live clients keyed by their opaque id.
#[derive(Debug, Default)]
pub struct ClientTable {
    sessions: DashMap<String, ClientSession>,
}

impl ClientTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new client under a fresh id. The returned token is
    /// cancelled when the client must be disconnected.
    pub fn register(&self, parent: &CancellationToken) -> (String, CancellationToken) {
        loop {
            let id = generate_client_id();
            if self.sessions.contains_key(&id) {
                continue;
            }
            let close = parent.child_token();
            self.sessions.insert(
                id.clone(),
                ClientSession {
                    id: id.clone(),
                    connected_at: Utc::now(),
                    close: close.clone(),
                },
            );
            return (id, close);
        }
    }

    pub fn remove(&self, id: &str) -> Option<ClientSession> {
        self.sessions.remove(id).map(|(_, session)| session)
    }

    /// Empties the table, returning every session that was live.
    pub fn drain(&self) -> Vec<ClientSession> {
        let ids: Vec<String> = self.sessions.iter().map(|e| e.key().clone()).collect();
        ids.iter().filter_map(|id| self.remove(id)).collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.sessions.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// `{"<id>": {"connected_at": "<rfc3339>"}}`
    pub fn snapshot(&self) -> Value {
        let mut clients = Map::new();
        for entry in self.sessions.iter() {
            clients.insert(
                entry.key().clone(),
                json!({
                    "connected_at": entry
                        .value()
                        .connected_at
                        .to_rfc3339_opts(SecondsFormat::Millis, true),
                }),
            );
        }
        Value::Object(clients)
    }

    pub fn snapshot_line(&self) -> Vec<u8> {
        let mut line = self.snapshot().to_string().into_bytes();
        line.push(b'\n');
        line
    }
}

/// 128 random bits, hex encoded.
pub fn generate_client_id() -> String {
    format!("{:016x}{:016x}", fastrand::u64(..), fastrand::u64(..))
}
