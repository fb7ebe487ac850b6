use crate::ports::QueryRepository;
use pdns_backend_domain::{BackendQuery, DomainError};
use std::sync::Arc;

const MAX_LIMIT: u32 = 1000;

pub struct GetRecentQueriesUseCase {
    repository: Arc<dyn QueryRepository>,
}

impl GetRecentQueriesUseCase {
    pub fn new(repository: Arc<dyn QueryRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, limit: u32) -> Result<Vec<BackendQuery>, DomainError> {
        self.repository.get_recent(limit.clamp(1, MAX_LIMIT)).await
    }
}
