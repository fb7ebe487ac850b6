use async_trait::async_trait;
use chrono::Utc;
use pdns_backend_application::ports::SuffixCachePort;
use pdns_backend_domain::DomainError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, instrument};

/// Expiry written next to every cached entry.
#[derive(Debug, Serialize, Deserialize)]
struct EntryMeta {
    /// Unix milliseconds; absent for entries that never expire.
    expires_at: Option<i64>,
}

/// Cache artifacts on local disk: `<dir>/<key>` holds the bytes and
/// `<dir>/<key>.meta` their expiry.
pub struct FileSuffixCache {
    dir: PathBuf,
}

impl FileSuffixCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn data_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    fn meta_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.meta", key))
    }

    async fn read_meta(&self, key: &str) -> Result<Option<EntryMeta>, DomainError> {
        match tokio::fs::read(self.meta_path(key)).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map(Some)
                .map_err(|e| DomainError::CacheError(format!("corrupt metadata for {}: {}", key, e))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DomainError::IoError(e.to_string())),
        }
    }
}

#[async_trait]
impl SuffixCachePort for FileSuffixCache {
    async fn exists(&self, key: &str) -> Result<bool, DomainError> {
        tokio::fs::try_exists(self.data_path(key))
            .await
            .map_err(|e| DomainError::IoError(e.to_string()))
    }

    #[instrument(skip(self))]
    async fn read(&self, key: &str) -> Result<Vec<u8>, DomainError> {
        if let Some(EntryMeta {
            expires_at: Some(expires_at),
        }) = self.read_meta(key).await?
        {
            if expires_at <= Utc::now().timestamp_millis() {
                debug!(expires_at, "Cache entry expired");
                return Err(DomainError::CacheExpired(key.to_string()));
            }
        }

        tokio::fs::read(self.data_path(key)).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DomainError::CacheError(format!("no cache entry for {}", key))
            } else {
                DomainError::IoError(e.to_string())
            }
        })
    }

    #[instrument(skip(self, bytes), fields(len = bytes.len()))]
    async fn write(
        &self,
        key: &str,
        bytes: &[u8],
        ttl: Option<Duration>,
    ) -> Result<(), DomainError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| DomainError::IoError(e.to_string()))?;

        let expires_at = ttl.map(|ttl| {
            let ttl_ms = i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX);
            Utc::now().timestamp_millis().saturating_add(ttl_ms)
        });
        let meta = serde_json::to_vec(&EntryMeta { expires_at })
            .map_err(|e| DomainError::CacheError(e.to_string()))?;

        tokio::fs::write(self.data_path(key), bytes)
            .await
            .map_err(|e| DomainError::IoError(e.to_string()))?;
        tokio::fs::write(self.meta_path(key), meta)
            .await
            .map_err(|e| DomainError::IoError(e.to_string()))?;

        debug!(?expires_at, "Cache entry written");
        Ok(())
    }
}
