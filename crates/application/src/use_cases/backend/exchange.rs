use pdns_backend_domain::{BackendQuery, BackendRequest, BackendResponse};
use serde_json::Value;
use tracing::debug;

use crate::services::RecordRenderer;

/// Lifecycle of one in-flight query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryState {
    Dispatching,
    Handling,
    Persisting,
    Done,
}

/// Everything a single exchange owns while it is being answered.
pub(super) struct Exchange {
    pub request: BackendRequest,
    pub query: BackendQuery,
    pub renderer: RecordRenderer,
    state: QueryState,
}

impl Exchange {
    pub fn new(request: BackendRequest, renderer: RecordRenderer) -> Self {
        let query = BackendQuery::from_request(&request);
        Self {
            request,
            query,
            renderer,
            state: QueryState::Dispatching,
        }
    }

    pub fn undecodable(payload: &[u8], renderer: RecordRenderer) -> Self {
        Self {
            request: BackendRequest::new("", Value::Null),
            query: BackendQuery::from_payload(payload),
            renderer,
            state: QueryState::Dispatching,
        }
    }

    pub fn advance(&mut self, next: QueryState) {
        debug!(
            method = %self.query.method,
            from = ?self.state,
            to = ?next,
            "Query state transition"
        );
        self.state = next;
    }

    /// Marks the answer unsuccessful and records `message` in its log.
    pub fn fail(&mut self, message: String) {
        self.renderer.unsuccessful();
        self.renderer.log(message);
    }

    pub fn capture_response(&mut self) {
        self.query.response = Some(self.renderer.to_response());
    }

    pub fn into_response(self) -> BackendResponse {
        self.renderer.to_response()
    }
}
