use async_trait::async_trait;
use pdns_backend_domain::{DomainError, Record, Zone};

#[async_trait]
pub trait ZoneRepository: Send + Sync {
    /// Active zone with the given (case-insensitive) name.
    async fn find_active_zone_by_name(&self, name: &str) -> Result<Option<Zone>, DomainError>;

    /// Active records of a zone for one host label.
    ///
    /// `host` of `None` selects the apex (`@`); `record_type` of `None` or
    /// `ANY` selects every type.
    async fn find_active_records(
        &self,
        zone_id: i64,
        host: Option<&str>,
        record_type: Option<&str>,
    ) -> Result<Vec<Record>, DomainError>;

    /// Every active record of a zone, for transfers.
    async fn find_zone_records(&self, zone_id: i64) -> Result<Vec<Record>, DomainError>;

    /// Whether `candidate` is a registered suffix in the operator's table.
    async fn find_suffix_entry(&self, candidate: &str) -> Result<bool, DomainError>;
}
