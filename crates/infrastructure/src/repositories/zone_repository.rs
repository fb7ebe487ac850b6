use async_trait::async_trait;
use pdns_backend_application::ports::ZoneRepository;
use pdns_backend_domain::dns_record::record::APEX_HOST;
use pdns_backend_domain::{DomainError, Record, Zone};
use sqlx::SqlitePool;
use tracing::{error, instrument};

type ZoneRow = (
    i64,
    String,
    String,
    i64,
    i64,
    i64,
    i64,
    i64,
    Option<i64>,
    i64,
    i64,
);

type RecordRow = (
    i64,
    i64,
    Option<i64>,
    String,
    String,
    String,
    i64,
    Option<i64>,
    Option<i64>,
    Option<i64>,
    Option<i64>,
    Option<String>,
    i64,
);

const ZONE_COLUMNS: &str =
    "id, name, name_servers, serial, refresh, retry, expire, ttl, user_id, is_active, is_public";

const RECORD_COLUMNS: &str =
    "id, zone_id, user_id, host, type, target, ttl, priority, weight, port, flag, tag, is_active";

pub struct SqliteZoneRepository {
    pool: SqlitePool,
}

impl SqliteZoneRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_zone(row: ZoneRow) -> Zone {
        let (id, name, name_servers, serial, refresh, retry, expire, ttl, user_id, is_active, is_public) =
            row;
        let mut zone = Zone::new(id, &name, parse_name_servers(&name_servers), serial);
        zone.refresh = to_u32(refresh);
        zone.retry = to_u32(retry);
        zone.expire = to_u32(expire);
        zone.ttl = to_u32(ttl);
        zone.user_id = user_id;
        zone.is_active = is_active != 0;
        zone.is_public = is_public != 0;
        zone
    }

    fn row_to_record(row: RecordRow) -> Record {
        let (
            id,
            zone_id,
            user_id,
            host,
            record_type,
            target,
            ttl,
            priority,
            weight,
            port,
            flag,
            tag,
            is_active,
        ) = row;
        Record {
            id,
            zone_id,
            user_id,
            host: host.to_lowercase(),
            record_type,
            target,
            ttl: to_u32(ttl),
            priority,
            weight,
            port,
            flag,
            tag,
            is_active: is_active != 0,
        }
    }
}

#[async_trait]
impl ZoneRepository for SqliteZoneRepository {
    #[instrument(skip(self))]
    async fn find_active_zone_by_name(&self, name: &str) -> Result<Option<Zone>, DomainError> {
        let sql = format!(
            "SELECT {} FROM dns_zone WHERE is_active = 1 AND name = ? LIMIT 1",
            ZONE_COLUMNS
        );
        let row = sqlx::query_as::<_, ZoneRow>(&sql)
            .bind(Zone::normalize_name(name))
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to query zone by name");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(row.map(Self::row_to_zone))
    }

    #[instrument(skip(self))]
    async fn find_active_records(
        &self,
        zone_id: i64,
        host: Option<&str>,
        record_type: Option<&str>,
    ) -> Result<Vec<Record>, DomainError> {
        let host = host.unwrap_or(APEX_HOST).to_lowercase();
        let record_type = record_type
            .map(|t| t.trim().to_uppercase())
            .filter(|t| t != "ANY");

        let rows = match record_type {
            Some(record_type) => {
                let sql = format!(
                    "SELECT {} FROM dns_record
                     WHERE is_active = 1 AND zone_id = ? AND host = ? AND UPPER(type) = ?
                     ORDER BY id ASC",
                    RECORD_COLUMNS
                );
                sqlx::query_as::<_, RecordRow>(&sql)
                    .bind(zone_id)
                    .bind(&host)
                    .bind(record_type)
                    .fetch_all(&self.pool)
                    .await
            }
            None => {
                let sql = format!(
                    "SELECT {} FROM dns_record
                     WHERE is_active = 1 AND zone_id = ? AND host = ?
                     ORDER BY id ASC",
                    RECORD_COLUMNS
                );
                sqlx::query_as::<_, RecordRow>(&sql)
                    .bind(zone_id)
                    .bind(&host)
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(|e| {
            error!(error = %e, "Failed to query zone records");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Self::row_to_record).collect())
    }

    #[instrument(skip(self))]
    async fn find_zone_records(&self, zone_id: i64) -> Result<Vec<Record>, DomainError> {
        let sql = format!(
            "SELECT {} FROM dns_record WHERE is_active = 1 AND zone_id = ? ORDER BY id ASC",
            RECORD_COLUMNS
        );
        let rows = sqlx::query_as::<_, RecordRow>(&sql)
            .bind(zone_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to query records for transfer");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(rows.into_iter().map(Self::row_to_record).collect())
    }

    #[instrument(skip(self))]
    async fn find_suffix_entry(&self, candidate: &str) -> Result<bool, DomainError> {
        let row = sqlx::query_as::<_, (i64,)>("SELECT id FROM dns_domain_tld WHERE name = ? LIMIT 1")
            .bind(candidate.to_lowercase())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to query suffix entry");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(row.is_some())
    }
}

/// Name servers are stored as a JSON array; a comma separated list is
/// accepted too.
fn parse_name_servers(raw: &str) -> Vec<String> {
    serde_json::from_str::<Vec<String>>(raw).unwrap_or_else(|_| {
        raw.split(',')
            .map(str::trim)
            .filter(|ns| !ns.is_empty())
            .map(str::to_string)
            .collect()
    })
}

fn to_u32(value: i64) -> u32 {
    value.clamp(0, u32::MAX as i64) as u32
}
