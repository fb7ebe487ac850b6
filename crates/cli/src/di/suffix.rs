use super::Repositories;
use pdns_backend_application::services::{PublicSuffixTable, SuffixResolver};
use pdns_backend_domain::config::SuffixSourceKind;
use pdns_backend_domain::{Config, DomainError};
use pdns_backend_infrastructure::suffix::{FileSuffixCache, PublicSuffixListClient};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub struct SuffixServices {
    pub resolver: Arc<SuffixResolver>,
    /// Present only for the public list source; the refresh job needs it.
    pub table: Option<Arc<PublicSuffixTable>>,
}

impl SuffixServices {
    pub fn new(config: &Config, repos: &Repositories) -> Result<Self, DomainError> {
        match config.suffix.source {
            SuffixSourceKind::PublicList => {
                let cache = Arc::new(FileSuffixCache::new(&config.suffix.cache_dir));
                let client = Arc::new(PublicSuffixListClient::new(
                    &config.suffix.list_url,
                    Duration::from_secs(config.suffix.fetch_timeout_secs),
                )?);
                let table = Arc::new(PublicSuffixTable::new(
                    cache,
                    client,
                    Duration::from_secs(config.suffix.cache_ttl_secs),
                ));
                info!(
                    list_url = %config.suffix.list_url,
                    cache_dir = %config.suffix.cache_dir,
                    "Using public suffix list"
                );

                Ok(Self {
                    resolver: Arc::new(SuffixResolver::public_list(Arc::clone(&table))),
                    table: Some(table),
                })
            }
            SuffixSourceKind::Database => {
                info!("Using database suffix table");
                Ok(Self {
                    resolver: Arc::new(SuffixResolver::database(repos.zones.clone())),
                    table: None,
                })
            }
        }
    }
}
