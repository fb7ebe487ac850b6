use super::RecordType;
use serde::{Deserialize, Serialize};

pub const APEX_HOST: &str = "@";
pub const WILDCARD_HOST: &str = "*";

/// A stored zone record.
///
/// `record_type` keeps the raw stored value; rows with a type outside
/// [`RecordType`] are carried through and skipped at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    pub zone_id: i64,
    pub user_id: Option<i64>,
    pub host: String,
    pub record_type: String,
    pub target: String,
    pub ttl: u32,
    pub priority: Option<i64>,
    pub weight: Option<i64>,
    pub port: Option<i64>,
    pub flag: Option<i64>,
    pub tag: Option<String>,
    pub is_active: bool,
}

impl Record {
    pub fn new(id: i64, zone_id: i64, host: &str, record_type: &str, target: &str, ttl: u32) -> Self {
        Self {
            id,
            zone_id,
            user_id: None,
            host: host.to_lowercase(),
            record_type: record_type.to_string(),
            target: target.to_string(),
            ttl,
            priority: None,
            weight: None,
            port: None,
            flag: None,
            tag: None,
            is_active: true,
        }
    }

    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_service(mut self, priority: i64, weight: i64, port: i64) -> Self {
        self.priority = Some(priority);
        self.weight = Some(weight);
        self.port = Some(port);
        self
    }

    pub fn with_caa(mut self, flag: i64, tag: &str) -> Self {
        self.flag = Some(flag);
        self.tag = Some(tag.to_string());
        self
    }

    pub fn parsed_type(&self) -> Option<RecordType> {
        self.record_type.parse().ok()
    }

    pub fn is_apex(&self) -> bool {
        self.host == APEX_HOST
    }

    pub fn is_wildcard(&self) -> bool {
        self.host == WILDCARD_HOST
    }

    /// Absolute owner name for a full zone listing: `@` becomes the zone
    /// name, any other label (including `*`) is prefixed to it.
    pub fn absolute_host(&self, zone_name: &str) -> String {
        if self.is_apex() {
            zone_name.to_string()
        } else {
            format!("{}.{}", self.host, zone_name)
        }
    }

    /// Absolute owner name for a targeted lookup: a wildcard match takes the
    /// name that was actually queried instead of the literal `*`.
    pub fn absolute_host_for_query(&self, zone_name: &str, queried_host: Option<&str>) -> String {
        match queried_host {
            Some(queried) if self.is_wildcard() => format!("{}.{}", queried, zone_name),
            _ => self.absolute_host(zone_name),
        }
    }
}
