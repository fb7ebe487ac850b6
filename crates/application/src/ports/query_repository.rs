use async_trait::async_trait;
use pdns_backend_domain::{BackendQuery, DomainError};

#[async_trait]
pub trait QueryRepository: Send + Sync {
    /// Stores one exchange and returns its id.
    async fn persist_query(&self, query: &BackendQuery) -> Result<i64, DomainError>;
    async fn get_recent(&self, limit: u32) -> Result<Vec<BackendQuery>, DomainError>;
}
