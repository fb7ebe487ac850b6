#![allow(dead_code)]

use async_trait::async_trait;
use pdns_backend_application::ports::{SuffixCachePort, SuffixListSource};
use pdns_backend_application::services::PublicSuffixTable;
use pdns_backend_domain::DomainError;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

pub const SUFFIX_LIST: &str = "com\nnet\nuk\nco.uk\n";

#[derive(Default)]
pub struct MockSuffixCache {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl MockSuffixCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SuffixCachePort for MockSuffixCache {
    async fn exists(&self, key: &str) -> Result<bool, DomainError> {
        Ok(self.entries.read().await.contains_key(key))
    }

    async fn read(&self, key: &str) -> Result<Vec<u8>, DomainError> {
        self.entries
            .read()
            .await
            .get(key)
            .cloned()
            .ok_or_else(|| DomainError::CacheError(format!("missing entry {}", key)))
    }

    async fn write(
        &self,
        key: &str,
        bytes: &[u8],
        _ttl: Option<Duration>,
    ) -> Result<(), DomainError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}

pub struct MockSuffixListSource {
    body: RwLock<String>,
    fetches: AtomicU64,
    should_fail: AtomicBool,
}

impl MockSuffixListSource {
    pub fn new(body: &str) -> Self {
        Self {
            body: RwLock::new(body.to_string()),
            fetches: AtomicU64::new(0),
            should_fail: AtomicBool::new(false),
        }
    }

    pub async fn set_body(&self, body: &str) {
        *self.body.write().await = body.to_string();
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub fn fetch_count(&self) -> u64 {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SuffixListSource for MockSuffixListSource {
    async fn fetch_list(&self) -> Result<String, DomainError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::SuffixListFetch("connection refused".to_string()));
        }
        Ok(self.body.read().await.clone())
    }
}

pub fn make_table(source: Arc<MockSuffixListSource>) -> Arc<PublicSuffixTable> {
    Arc::new(PublicSuffixTable::new(
        Arc::new(MockSuffixCache::new()),
        source,
        Duration::from_secs(3600),
    ))
}
