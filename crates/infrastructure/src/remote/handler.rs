use async_trait::async_trait;
use pdns_backend_application::use_cases::HandleBackendQueryUseCase;
use std::sync::Arc;

/// Per-connection callbacks invoked by [`super::UnixSocketServer`].
#[async_trait]
pub trait ConnectionHandler: Send + Sync {
    async fn on_connect(&self, _client_id: &str) {}

    /// Produces the bytes written back for one request frame.
    async fn on_request(&self, client_id: &str, payload: &[u8]) -> Vec<u8>;

    /// The peer closed its end.
    async fn on_disconnect(&self, _client_id: &str) {}

    /// The server is closing the connection during shutdown.
    async fn on_force_disconnect(&self, _client_id: &str) {}
}

/// Feeds every request frame into a fresh backend query run.
pub struct BackendConnectionHandler {
    engine: Arc<HandleBackendQueryUseCase>,
}

impl BackendConnectionHandler {
    pub fn new(engine: Arc<HandleBackendQueryUseCase>) -> Self {
        Self { engine }
    }
}

#[async_trait]
impl ConnectionHandler for BackendConnectionHandler {
    async fn on_request(&self, _client_id: &str, payload: &[u8]) -> Vec<u8> {
        self.engine.execute_raw(payload).await.to_json_line()
    }
}
