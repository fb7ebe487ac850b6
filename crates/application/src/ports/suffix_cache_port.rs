use async_trait::async_trait;
use pdns_backend_domain::DomainError;
use std::time::Duration;

/// Keyed byte store with per-entry expiry, used for the suffix list.
#[async_trait]
pub trait SuffixCachePort: Send + Sync {
    async fn exists(&self, key: &str) -> Result<bool, DomainError>;

    /// Fails with [`DomainError::CacheExpired`] once the entry's ttl has passed.
    async fn read(&self, key: &str) -> Result<Vec<u8>, DomainError>;

    /// `ttl` of `None` stores the entry without expiry.
    async fn write(&self, key: &str, bytes: &[u8], ttl: Option<Duration>)
        -> Result<(), DomainError>;
}
