use async_trait::async_trait;
use pdns_backend_application::ports::SuffixListSource;
use pdns_backend_domain::DomainError;
use std::time::Duration;
use tracing::{info, instrument};

/// Downloads the public suffix list over HTTPS.
pub struct PublicSuffixListClient {
    http_client: reqwest::Client,
    url: String,
}

impl PublicSuffixListClient {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, DomainError> {
        let http_client = reqwest::Client::builder()
            .user_agent(concat!("pdns-backend/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::SuffixListFetch(e.to_string()))?;

        Ok(Self {
            http_client,
            url: url.to_string(),
        })
    }
}

#[async_trait]
impl SuffixListSource for PublicSuffixListClient {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch_list(&self) -> Result<String, DomainError> {
        let response = self
            .http_client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| DomainError::SuffixListFetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::SuffixListFetch(format!(
                "HTTP {} from {}",
                status, self.url
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| DomainError::SuffixListFetch(e.to_string()))?;

        info!(bytes = text.len(), "Public suffix list downloaded");
        Ok(text)
    }
}
