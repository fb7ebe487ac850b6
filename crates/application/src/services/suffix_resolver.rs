use pdns_backend_domain::parsed_host::{split_labels, suffix_candidates};
use pdns_backend_domain::{DomainError, ParsedHost};
use std::sync::Arc;

use super::PublicSuffixTable;
use crate::ports::ZoneRepository;

enum SuffixBackend {
    PublicList(Arc<PublicSuffixTable>),
    Database(Arc<dyn ZoneRepository>),
}

/// Splits host names into host label, registrable domain and suffix.
pub struct SuffixResolver {
    backend: SuffixBackend,
}

impl SuffixResolver {
    pub fn public_list(table: Arc<PublicSuffixTable>) -> Self {
        Self {
            backend: SuffixBackend::PublicList(table),
        }
    }

    /// Membership answered by the operator's suffix table in storage.
    pub fn database(zones: Arc<dyn ZoneRepository>) -> Self {
        Self {
            backend: SuffixBackend::Database(zones),
        }
    }

    pub async fn parse(&self, hostname: &str) -> Result<ParsedHost, DomainError> {
        match &self.backend {
            SuffixBackend::PublicList(table) => table.parse(hostname).await,
            SuffixBackend::Database(zones) => {
                let labels = split_labels(hostname);
                if labels.len() < 2 {
                    return Ok(ParsedHost::unresolved(hostname));
                }

                let mut matched = 0;
                for (suffix_len, candidate) in suffix_candidates(&labels) {
                    if zones.find_suffix_entry(&candidate).await? {
                        matched = suffix_len;
                        break;
                    }
                }
                Ok(ParsedHost::matched(hostname, &labels, matched))
            }
        }
    }

    /// Fully qualifies names under a known registrable domain (exactly one
    /// trailing dot); anything else is returned without trailing dots.
    pub async fn normalize_target_host(&self, host: &str) -> Result<String, DomainError> {
        let bare = host.trim().trim_end_matches('.').trim();
        let parsed = self.parse(bare).await?;
        if parsed.is_resolved() {
            Ok(format!("{}.", bare))
        } else {
            Ok(bare.to_string())
        }
    }
}
