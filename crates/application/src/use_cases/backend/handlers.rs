use chrono::Utc;
use pdns_backend_domain::dns_record::record::WILDCARD_HOST;
use pdns_backend_domain::{DomainError, ParsedHost, Zone};
use serde::Deserialize;
use tracing::{instrument, warn};

use super::exchange::Exchange;
use super::handle_backend_query::HandleBackendQueryUseCase;

#[derive(Debug, Deserialize)]
struct ListParameters {
    zonename: String,
}

#[derive(Debug, Deserialize)]
struct LookupParameters {
    qname: String,
    qtype: String,
}

impl HandleBackendQueryUseCase {
    pub(super) fn initialize(&self, exchange: &mut Exchange) -> Result<(), DomainError> {
        exchange.renderer.successful();
        exchange.renderer.log(self.acknowledgement.clone());
        Ok(())
    }

    /// Zone transfer: SOA followed by every active record of the zone.
    #[instrument(skip(self, exchange))]
    pub(super) async fn list(&self, exchange: &mut Exchange) -> Result<(), DomainError> {
        let params: ListParameters = exchange.request.parameters_as()?;
        let start = Utc::now().timestamp_millis();
        exchange.renderer.log(format!("Start:{}", start));

        let parsed = self.resolver.parse(&params.zonename).await?;
        let zone = self.matched_zone(exchange, &parsed).await?;
        exchange.renderer.soa(&zone).await?;

        let records = self.zones.find_zone_records(zone.id).await?;
        if records.is_empty() {
            exchange
                .renderer
                .log(format!("Zone [{}] Has No Records", zone.name));
        } else {
            exchange.renderer.log(format!(
                "Zone [{}] Has [{}] Records",
                zone.name,
                records.len()
            ));
            for mut record in records {
                record.host = record.absolute_host(&zone.name);
                exchange.renderer.record(&record).await?;
                exchange.query.record_ids.push(record.id);
            }
        }

        finish(exchange, start);
        Ok(())
    }

    /// Targeted lookup, falling back to the zone's wildcard when a concrete
    /// host label has no records of its own.
    #[instrument(skip(self, exchange))]
    pub(super) async fn lookup(&self, exchange: &mut Exchange) -> Result<(), DomainError> {
        let params: LookupParameters = exchange.request.parameters_as()?;
        let start = Utc::now().timestamp_millis();
        exchange.renderer.log(format!("Start:{}", start));

        let parsed = self.resolver.parse(&params.qname).await?;
        let zone = self.matched_zone(exchange, &parsed).await?;

        if params.qtype.eq_ignore_ascii_case("SOA") {
            exchange.renderer.soa(&zone).await?;
            finish(exchange, start);
            return Ok(());
        }

        let host = parsed.host.as_deref();
        let record_type = Some(params.qtype.as_str());
        let mut records = self
            .zones
            .find_active_records(zone.id, host, record_type)
            .await?;
        if records.is_empty() && host.is_some() {
            records = self
                .zones
                .find_active_records(zone.id, Some(WILDCARD_HOST), record_type)
                .await?;
        }

        if records.is_empty() {
            exchange
                .renderer
                .log(format!("Zone [{}] Has No Records", zone.name));
        } else {
            exchange.renderer.log(format!(
                "Zone [{}] Has [{}] Records",
                zone.name,
                records.len()
            ));
            for mut record in records {
                record.host = record.absolute_host_for_query(&zone.name, host);
                exchange.renderer.record(&record).await?;
                exchange.query.record_ids.push(record.id);
            }
        }

        finish(exchange, start);
        Ok(())
    }

    pub(super) fn unsupported(&self, exchange: &mut Exchange) -> Result<(), DomainError> {
        let message = format!("Method [{}] Is Not Supported", exchange.query.method);
        warn!(method = %exchange.query.method, "{}", message);
        exchange.renderer.unsuccessful();
        exchange.renderer.log(message);
        Ok(())
    }

    async fn matched_zone(
        &self,
        exchange: &mut Exchange,
        parsed: &ParsedHost,
    ) -> Result<Zone, DomainError> {
        let Some(domain) = parsed.domain.as_deref() else {
            return Err(DomainError::ZoneNotFound(parsed.source.clone()));
        };

        let zone = self
            .zones
            .find_active_zone_by_name(domain)
            .await?
            .ok_or_else(|| DomainError::ZoneNotFound(domain.to_string()))?;

        exchange.renderer.log(format!("Zone [{}] Matched", domain));
        exchange.query.zone_id = Some(zone.id);
        exchange.query.user_id = zone.user_id;
        Ok(zone)
    }
}

fn finish(exchange: &mut Exchange, start: i64) {
    let finish = Utc::now().timestamp_millis();
    exchange.renderer.log(format!("Finish:{}", finish));
    exchange
        .renderer
        .log(format!("TimeTaken:{}", finish - start));
}
