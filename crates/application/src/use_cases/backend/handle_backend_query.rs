use pdns_backend_domain::{BackendRequest, BackendResponse, DomainError, Method};
use std::sync::Arc;
use tracing::{debug, error, instrument};

use super::exchange::{Exchange, QueryState};
use crate::ports::{QueryRepository, ZoneRepository};
use crate::services::{RecordRenderer, SuffixResolver};

/// Answers one remote backend request and records it in the audit trail.
///
/// Every call resolves to a well-formed response: handler errors and
/// persistence errors are folded into an unsuccessful result.
pub struct HandleBackendQueryUseCase {
    pub(super) zones: Arc<dyn ZoneRepository>,
    pub(super) queries: Arc<dyn QueryRepository>,
    pub(super) resolver: Arc<SuffixResolver>,
    pub(super) hostmaster: String,
    pub(super) acknowledgement: String,
}

impl HandleBackendQueryUseCase {
    pub fn new(
        zones: Arc<dyn ZoneRepository>,
        queries: Arc<dyn QueryRepository>,
        resolver: Arc<SuffixResolver>,
        hostmaster: &str,
        acknowledgement: &str,
    ) -> Self {
        Self {
            zones,
            queries,
            resolver,
            hostmaster: hostmaster.to_string(),
            acknowledgement: acknowledgement.to_string(),
        }
    }

    /// Decodes a raw envelope first. Payloads that are not a request object
    /// are answered with an unsuccessful result and still persisted.
    pub async fn execute_raw(&self, payload: &[u8]) -> BackendResponse {
        match BackendRequest::from_slice(payload) {
            Ok(request) => self.execute(request).await,
            Err(e) => {
                error!(error = %e, "Undecodable backend request");
                let renderer = RecordRenderer::new(Arc::clone(&self.resolver), &self.hostmaster);
                let mut exchange = Exchange::undecodable(payload, renderer);
                exchange.fail(e.to_string());
                self.finish(exchange).await
            }
        }
    }

    #[instrument(skip(self, request), fields(method = %request.method()))]
    pub async fn execute(&self, request: BackendRequest) -> BackendResponse {
        let renderer = RecordRenderer::new(Arc::clone(&self.resolver), &self.hostmaster);
        let mut exchange = Exchange::new(request, renderer);

        exchange.advance(QueryState::Handling);
        if let Err(e) = self.dispatch(&mut exchange).await {
            error!(error = %e, method = %exchange.query.method, "Backend query failed");
            exchange.fail(e.to_string());
        }

        self.finish(exchange).await
    }

    async fn finish(&self, mut exchange: Exchange) -> BackendResponse {
        exchange.advance(QueryState::Persisting);
        self.persist(&mut exchange).await;

        exchange.advance(QueryState::Done);
        exchange.into_response()
    }

    async fn dispatch(&self, exchange: &mut Exchange) -> Result<(), DomainError> {
        let method = exchange.query.method.clone();
        match method {
            Method::Initialize => self.initialize(exchange),
            Method::List => self.list(exchange).await,
            Method::Lookup => self.lookup(exchange).await,
            _ => self.unsupported(exchange),
        }
    }

    /// Two attempts at most; a second failure is logged and dropped.
    async fn persist(&self, exchange: &mut Exchange) {
        for attempt in 1..=2 {
            exchange.capture_response();
            match self.queries.persist_query(&exchange.query).await {
                Ok(id) => {
                    debug!(query_id = id, attempt, "Backend query persisted");
                    exchange.query.id = Some(id);
                    return;
                }
                Err(e) => {
                    error!(error = %e, attempt, "Failed to persist backend query");
                    exchange.fail(e.to_string());
                }
            }
        }
    }
}
