#![allow(dead_code)]
#![allow(unused_imports)]

use async_trait::async_trait;
use pdns_backend_application::ports::{
    QueryRepository, SuffixCachePort, SuffixListSource, ZoneRepository,
};
use pdns_backend_application::services::{PublicSuffixTable, SuffixResolver};
use pdns_backend_domain::{BackendQuery, DomainError, Record, Zone};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

pub const SUFFIX_LIST: &str = "\
// test list
com
net
org
uk
co.uk
io
";

#[derive(Clone)]
pub struct MockZoneRepository {
    zones: Arc<RwLock<Vec<Zone>>>,
    records: Arc<RwLock<Vec<Record>>>,
    suffixes: Arc<RwLock<HashSet<String>>>,
    record_calls: Arc<AtomicU64>,
    suffix_calls: Arc<AtomicU64>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockZoneRepository {
    pub fn new() -> Self {
        Self {
            zones: Arc::new(RwLock::new(Vec::new())),
            records: Arc::new(RwLock::new(Vec::new())),
            suffixes: Arc::new(RwLock::new(HashSet::new())),
            record_calls: Arc::new(AtomicU64::new(0)),
            suffix_calls: Arc::new(AtomicU64::new(0)),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    pub async fn add_zone(&self, zone: Zone) {
        self.zones.write().await.push(zone);
    }

    pub async fn add_record(&self, record: Record) {
        self.records.write().await.push(record);
    }

    pub async fn add_suffixes(&self, suffixes: &[&str]) {
        let mut set = self.suffixes.write().await;
        for suffix in suffixes {
            set.insert(suffix.to_string());
        }
    }

    pub fn suffix_calls(&self) -> u64 {
        self.suffix_calls.load(Ordering::Relaxed)
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    pub fn record_calls(&self) -> u64 {
        self.record_calls.load(Ordering::SeqCst)
    }

    async fn check_failure(&self) -> Result<(), DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::DatabaseError("Mock zone store failed".to_string()));
        }
        Ok(())
    }
}

impl Default for MockZoneRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ZoneRepository for MockZoneRepository {
    async fn find_active_zone_by_name(&self, name: &str) -> Result<Option<Zone>, DomainError> {
        self.check_failure().await?;
        let name = name.to_lowercase();
        Ok(self
            .zones
            .read()
            .await
            .iter()
            .find(|z| z.is_active && z.name == name)
            .cloned())
    }

    async fn find_active_records(
        &self,
        zone_id: i64,
        host: Option<&str>,
        record_type: Option<&str>,
    ) -> Result<Vec<Record>, DomainError> {
        self.record_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure().await?;
        let host = host.unwrap_or("@").to_lowercase();
        let record_type = record_type
            .filter(|t| !t.eq_ignore_ascii_case("ANY"))
            .map(str::to_uppercase);

        Ok(self
            .records
            .read()
            .await
            .iter()
            .filter(|r| r.is_active && r.zone_id == zone_id && r.host == host)
            .filter(|r| match &record_type {
                Some(t) => r.record_type.eq_ignore_ascii_case(t),
                None => true,
            })
            .cloned()
            .collect())
    }

    async fn find_zone_records(&self, zone_id: i64) -> Result<Vec<Record>, DomainError> {
        self.record_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure().await?;
        Ok(self
            .records
            .read()
            .await
            .iter()
            .filter(|r| r.is_active && r.zone_id == zone_id)
            .cloned()
            .collect())
    }

    async fn find_suffix_entry(&self, candidate: &str) -> Result<bool, DomainError> {
        self.suffix_calls.fetch_add(1, Ordering::Relaxed);
        self.check_failure().await?;
        Ok(self.suffixes.read().await.contains(&candidate.to_lowercase()))
    }
}

#[derive(Clone)]
pub struct MockQueryRepository {
    queries: Arc<RwLock<Vec<BackendQuery>>>,
    attempts: Arc<AtomicU64>,
    failures_remaining: Arc<AtomicUsize>,
    last_limit: Arc<RwLock<Option<u32>>>,
}

impl MockQueryRepository {
    pub fn new() -> Self {
        Self {
            queries: Arc::new(RwLock::new(Vec::new())),
            attempts: Arc::new(AtomicU64::new(0)),
            failures_remaining: Arc::new(AtomicUsize::new(0)),
            last_limit: Arc::new(RwLock::new(None)),
        }
    }

    /// The next `count` persist calls fail.
    pub fn fail_next(&self, count: usize) {
        self.failures_remaining.store(count, Ordering::SeqCst);
    }

    pub fn attempts(&self) -> u64 {
        self.attempts.load(Ordering::SeqCst)
    }

    pub async fn persisted(&self) -> Vec<BackendQuery> {
        self.queries.read().await.clone()
    }

    pub async fn last_limit(&self) -> Option<u32> {
        *self.last_limit.read().await
    }
}

impl Default for MockQueryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QueryRepository for MockQueryRepository {
    async fn persist_query(&self, query: &BackendQuery) -> Result<i64, DomainError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        let remaining = self.failures_remaining.load(Ordering::SeqCst);
        if remaining > 0 {
            self.failures_remaining.store(remaining - 1, Ordering::SeqCst);
            return Err(DomainError::DatabaseError("disk I/O error".to_string()));
        }

        let mut queries = self.queries.write().await;
        let id = queries.len() as i64 + 1;
        let mut stored = query.clone();
        stored.id = Some(id);
        queries.push(stored);
        Ok(id)
    }

    async fn get_recent(&self, limit: u32) -> Result<Vec<BackendQuery>, DomainError> {
        *self.last_limit.write().await = Some(limit);
        let queries = self.queries.read().await;
        Ok(queries.iter().rev().take(limit as usize).cloned().collect())
    }
}

/// In-memory cache; entries can be flagged expired.
#[derive(Clone)]
pub struct MockSuffixCache {
    entries: Arc<RwLock<HashMap<String, Vec<u8>>>>,
    expired: Arc<RwLock<HashSet<String>>>,
    writes: Arc<AtomicU64>,
}

impl MockSuffixCache {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            expired: Arc::new(RwLock::new(HashSet::new())),
            writes: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn insert(&self, key: &str, bytes: &[u8]) {
        self.entries
            .write()
            .await
            .insert(key.to_string(), bytes.to_vec());
    }

    pub async fn expire(&self, key: &str) {
        self.expired.write().await.insert(key.to_string());
    }

    pub fn writes(&self) -> u64 {
        self.writes.load(Ordering::SeqCst)
    }
}

impl Default for MockSuffixCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SuffixCachePort for MockSuffixCache {
    async fn exists(&self, key: &str) -> Result<bool, DomainError> {
        Ok(self.entries.read().await.contains_key(key))
    }

    async fn read(&self, key: &str) -> Result<Vec<u8>, DomainError> {
        if self.expired.read().await.contains(key) {
            return Err(DomainError::CacheExpired(key.to_string()));
        }
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
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.expired.write().await.remove(key);
        self.entries
            .write()
            .await
            .insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}

#[derive(Clone)]
pub struct MockSuffixListSource {
    body: Arc<RwLock<String>>,
    fetches: Arc<AtomicU64>,
    should_fail: Arc<RwLock<bool>>,
    delay: Option<Duration>,
}

impl MockSuffixListSource {
    pub fn new(body: &str) -> Self {
        Self {
            body: Arc::new(RwLock::new(body.to_string())),
            fetches: Arc::new(AtomicU64::new(0)),
            should_fail: Arc::new(RwLock::new(false)),
            delay: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub async fn set_body(&self, body: &str) {
        *self.body.write().await = body.to_string();
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    pub fn fetches(&self) -> u64 {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SuffixListSource for MockSuffixListSource {
    async fn fetch_list(&self) -> Result<String, DomainError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if *self.should_fail.read().await {
            return Err(DomainError::SuffixListFetch("connection refused".to_string()));
        }
        Ok(self.body.read().await.clone())
    }
}

pub fn suffix_table(
    cache: Arc<MockSuffixCache>,
    source: Arc<MockSuffixListSource>,
) -> Arc<PublicSuffixTable> {
    Arc::new(PublicSuffixTable::new(
        cache,
        source,
        Duration::from_secs(3600),
    ))
}

pub fn public_list_resolver() -> Arc<SuffixResolver> {
    let table = suffix_table(
        Arc::new(MockSuffixCache::new()),
        Arc::new(MockSuffixListSource::new(SUFFIX_LIST)),
    );
    Arc::new(SuffixResolver::public_list(table))
}
