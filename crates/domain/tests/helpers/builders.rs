#![allow(dead_code)]
use pdns_backend_domain::{Record, SuffixTable, Zone};

pub fn suffix_table() -> SuffixTable {
    SuffixTable::from_entries(["com", "net", "org", "uk", "co.uk", "io"])
}

pub struct RecordBuilder {
    id: i64,
    zone_id: i64,
    host: String,
    record_type: String,
    target: String,
    ttl: u32,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            zone_id: 1,
            host: "@".to_string(),
            record_type: "A".to_string(),
            target: "192.0.2.1".to_string(),
            ttl: 3600,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn host(mut self, host: &str) -> Self {
        self.host = host.to_string();
        self
    }

    pub fn record_type(mut self, record_type: &str) -> Self {
        self.record_type = record_type.to_string();
        self
    }

    pub fn target(mut self, target: &str) -> Self {
        self.target = target.to_string();
        self
    }

    pub fn build(self) -> Record {
        Record::new(
            self.id,
            self.zone_id,
            &self.host,
            &self.record_type,
            &self.target,
            self.ttl,
        )
    }
}

pub fn zone(name: &str) -> Zone {
    Zone::new(
        1,
        name,
        vec!["ns1.example.net".to_string(), "ns2.example.net".to_string()],
        2024010101,
    )
}
