use serde::{Deserialize, Serialize};

/// Where suffix membership is answered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuffixSourceKind {
    /// Downloaded public suffix list, kept in memory and cached on disk.
    #[default]
    PublicList,
    /// The `dns_domain_tld` table.
    Database,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SuffixConfig {
    #[serde(default)]
    pub source: SuffixSourceKind,

    #[serde(default = "default_list_url")]
    pub list_url: String,

    #[serde(default = "default_cache_dir")]
    pub cache_dir: String,

    /// Lifetime of the cached list before a read reports it expired.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    /// Interval of the background refresh job.
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,

    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

impl Default for SuffixConfig {
    fn default() -> Self {
        Self {
            source: SuffixSourceKind::default(),
            list_url: default_list_url(),
            cache_dir: default_cache_dir(),
            cache_ttl_secs: default_cache_ttl_secs(),
            refresh_interval_secs: default_refresh_interval_secs(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
        }
    }
}

fn default_list_url() -> String {
    "https://publicsuffix.org/list/public_suffix_list.dat".to_string()
}

fn default_cache_dir() -> String {
    "/var/cache/pdns-backend".to_string()
}

fn default_cache_ttl_secs() -> u64 {
    604800
}

fn default_refresh_interval_secs() -> u64 {
    86400
}

fn default_fetch_timeout_secs() -> u64 {
    30
}
