use pdns_backend_domain::{
    BackendResponse, BackendResult, DomainError, Record, RecordType, ResponseRecord, Zone,
};
use serde_json::Value;
use std::sync::Arc;

use super::SuffixResolver;

/// Accumulates the answer for one query: either a success flag or an
/// ordered list of records, plus a free-text log.
pub struct RecordRenderer {
    resolver: Arc<SuffixResolver>,
    hostmaster: String,
    result: BackendResult,
    log: Vec<String>,
}

impl RecordRenderer {
    pub fn new(resolver: Arc<SuffixResolver>, hostmaster: &str) -> Self {
        Self {
            resolver,
            hostmaster: hostmaster.to_string(),
            result: BackendResult::Unset,
            log: Vec::new(),
        }
    }

    pub fn result(&self) -> &BackendResult {
        &self.result
    }

    pub fn log_entries(&self) -> &[String] {
        &self.log
    }

    pub fn add(&mut self, record: ResponseRecord) -> &mut Self {
        match &mut self.result {
            BackendResult::Records(records) => records.push(record),
            _ => self.result = BackendResult::Records(vec![record]),
        }
        self
    }

    pub fn log(&mut self, message: impl Into<String>) -> &mut Self {
        self.log.push(message.into());
        self
    }

    pub fn successful(&mut self) -> &mut Self {
        self.result = BackendResult::Flag(true);
        self
    }

    pub fn unsuccessful(&mut self) -> &mut Self {
        self.result = BackendResult::Flag(false);
        self
    }

    pub fn a(&mut self, name: &str, ttl: u32, content: &str) -> &mut Self {
        self.add(answer(RecordType::A, name, ttl, content.to_string()))
    }

    pub fn aaaa(&mut self, name: &str, ttl: u32, content: &str) -> &mut Self {
        self.add(answer(RecordType::AAAA, name, ttl, content.to_string()))
    }

    pub fn caa(&mut self, name: &str, ttl: u32, flags: i64, tag: &str, content: &str) -> &mut Self {
        let value = content.trim().replace('"', "");
        self.add(answer(
            RecordType::CAA,
            name,
            ttl,
            format!("{} {} \"{}\"", flags, tag, value),
        ))
    }

    pub async fn cname(&mut self, name: &str, ttl: u32, target: &str) -> Result<&mut Self, DomainError> {
        let target = self.resolver.normalize_target_host(target).await?;
        Ok(self.add(answer(RecordType::CNAME, name, ttl, target)))
    }

    /// Reserved; DNSSEC material is never served.
    pub fn dnssec(&mut self) -> &mut Self {
        self
    }

    pub async fn mx(
        &mut self,
        name: &str,
        ttl: u32,
        target: &str,
        priority: i64,
    ) -> Result<&mut Self, DomainError> {
        let target = self.resolver.normalize_target_host(target).await?;
        Ok(self.add(answer(
            RecordType::MX,
            name,
            ttl,
            format!("{} {}", priority, target),
        )))
    }

    pub async fn ns(&mut self, name: &str, ttl: u32, target: &str) -> Result<&mut Self, DomainError> {
        let target = self.resolver.normalize_target_host(target).await?;
        Ok(self.add(answer(RecordType::NS, name, ttl, target)))
    }

    pub async fn srv(
        &mut self,
        name: &str,
        ttl: u32,
        priority: i64,
        weight: i64,
        port: i64,
        target: &str,
    ) -> Result<&mut Self, DomainError> {
        let target = self.resolver.normalize_target_host(target).await?;
        Ok(self.add(answer(
            RecordType::SRV,
            name,
            ttl,
            format!("{} {} {} {}", priority, weight, port, target),
        )))
    }

    pub fn txt(&mut self, name: &str, ttl: u32, content: &str) -> &mut Self {
        self.add(answer(RecordType::TXT, name, ttl, content.to_string()))
    }

    /// Start of authority for `zone`, built from its primary name server.
    pub async fn soa(&mut self, zone: &Zone) -> Result<&mut Self, DomainError> {
        let name_server = self
            .resolver
            .normalize_target_host(zone.primary_name_server()?)
            .await?;
        let mailbox = self.hostmaster.replace('@', ".");
        let hostmaster = self.resolver.normalize_target_host(&mailbox).await?;

        Ok(self.add(ResponseRecord {
            qtype: "SOA".to_string(),
            qname: zone.name.clone(),
            ttl: zone.ttl,
            content: format!(
                "{} {} {} {} {} {} {}",
                name_server,
                hostmaster,
                zone.serial,
                zone.refresh,
                zone.retry,
                zone.expire,
                zone.ttl
            ),
            auth: None,
        }))
    }

    /// Renders a stored record under the owner name in `record.host`.
    /// DNSSEC rows and unknown types leave the result untouched.
    pub async fn record(&mut self, record: &Record) -> Result<&mut Self, DomainError> {
        let Some(record_type) = record.parsed_type() else {
            return Ok(self);
        };

        let name = record.host.as_str();
        let ttl = record.ttl;
        let target = record.target.as_str();

        match record_type {
            RecordType::A => Ok(self.a(name, ttl, target)),
            RecordType::AAAA => Ok(self.aaaa(name, ttl, target)),
            RecordType::CAA => {
                let tag = record.tag.as_deref().unwrap_or_default();
                Ok(self.caa(name, ttl, record.flag.unwrap_or(0), tag, target))
            }
            RecordType::CNAME => self.cname(name, ttl, target).await,
            RecordType::DNSSEC => Ok(self.dnssec()),
            RecordType::MX => self.mx(name, ttl, target, record.priority.unwrap_or(0)).await,
            RecordType::NS => self.ns(name, ttl, target).await,
            RecordType::SRV => {
                self.srv(
                    name,
                    ttl,
                    record.priority.unwrap_or(0),
                    record.weight.unwrap_or(0),
                    record.port.unwrap_or(0),
                    target,
                )
                .await
            }
            RecordType::TXT => Ok(self.txt(name, ttl, target)),
        }
    }

    pub fn to_response(&self) -> BackendResponse {
        BackendResponse {
            result: self.result.clone(),
            log: self.log.clone(),
        }
    }

    pub fn to_object(&self) -> Value {
        self.to_response().to_value()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.to_response()).unwrap_or_else(|_| self.to_object().to_string())
    }
}

fn answer(record_type: RecordType, name: &str, ttl: u32, content: String) -> ResponseRecord {
    ResponseRecord {
        qtype: record_type.as_str().to_string(),
        qname: name.to_string(),
        ttl,
        content,
        auth: Some(true),
    }
}
