use arc_swap::ArcSwap;
use pdns_backend_domain::{DomainError, ParsedHost, SuffixTable};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use crate::ports::{SuffixCachePort, SuffixListSource};

pub const SUFFIX_CACHE_KEY: &str = "public.suffix.dat";

/// Process-wide public suffix table.
///
/// Loaded lazily on first use from the cache, or from the remote list when
/// the cache is empty. Concurrent first uses share one load; refreshes
/// replace the table wholesale.
pub struct PublicSuffixTable {
    cache: Arc<dyn SuffixCachePort>,
    source: Arc<dyn SuffixListSource>,
    cache_ttl: Duration,
    table: ArcSwap<Option<SuffixTable>>,
    load_lock: Mutex<()>,
}

impl PublicSuffixTable {
    pub fn new(
        cache: Arc<dyn SuffixCachePort>,
        source: Arc<dyn SuffixListSource>,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            cache,
            source,
            cache_ttl,
            table: ArcSwap::from_pointee(None),
            load_lock: Mutex::new(()),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.table.load().is_some()
    }

    pub async fn parse(&self, hostname: &str) -> Result<ParsedHost, DomainError> {
        let table = self.get().await?;
        match table.as_ref() {
            Some(table) => Ok(table.parse(hostname)),
            None => Err(DomainError::SuffixTableUnavailable(
                "suffix table not loaded".to_string(),
            )),
        }
    }

    /// Current table, loading it first if needed.
    pub async fn get(&self) -> Result<Arc<Option<SuffixTable>>, DomainError> {
        let current = self.table.load_full();
        if current.is_some() {
            return Ok(current);
        }

        let _guard = self.load_lock.lock().await;
        let current = self.table.load_full();
        if current.is_some() {
            return Ok(current);
        }

        let table = self
            .open()
            .await
            .map_err(|e| DomainError::SuffixTableUnavailable(e.to_string()))?;
        info!(entries = table.len(), "Public suffix table loaded");

        let loaded = Arc::new(Some(table));
        self.table.store(Arc::clone(&loaded));
        Ok(loaded)
    }

    /// Downloads the list again and swaps it in. The previous table stays
    /// in service when the download fails.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Result<usize, DomainError> {
        let _guard = self.load_lock.lock().await;
        let table = self.download().await?;
        let entries = table.len();
        self.table.store(Arc::new(Some(table)));
        info!(entries, "Public suffix table refreshed");
        Ok(entries)
    }

    async fn open(&self) -> Result<SuffixTable, DomainError> {
        if !self.cache.exists(SUFFIX_CACHE_KEY).await? {
            debug!("Suffix cache empty, downloading list");
            return self.download().await;
        }

        match self.cache.read(SUFFIX_CACHE_KEY).await {
            Ok(bytes) => SuffixTable::from_json(&bytes),
            Err(e) if e.is_cache_expired() => {
                warn!(error = %e, "Suffix cache expired, downloading list");
                self.download().await?;
                let bytes = self.cache.read(SUFFIX_CACHE_KEY).await?;
                SuffixTable::from_json(&bytes)
            }
            Err(e) => Err(e),
        }
    }

    async fn download(&self) -> Result<SuffixTable, DomainError> {
        let text = self.source.fetch_list().await?;
        let table = SuffixTable::from_list_text(&text);
        if table.is_empty() {
            return Err(DomainError::SuffixListFetch(
                "suffix list contained no entries".to_string(),
            ));
        }

        self.cache
            .write(SUFFIX_CACHE_KEY, &table.to_json(), Some(self.cache_ttl))
            .await?;
        Ok(table)
    }
}
