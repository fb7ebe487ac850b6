use async_trait::async_trait;
use pdns_backend_domain::DomainError;

/// Remote authority publishing the public suffix list.
#[async_trait]
pub trait SuffixListSource: Send + Sync {
    /// Raw list text, comments included.
    async fn fetch_list(&self) -> Result<String, DomainError>;
}
