use async_trait::async_trait;
use pdns_backend_application::ports::QueryRepository;
use pdns_backend_domain::{BackendQuery, BackendResponse, DomainError, Method};
use serde_json::Value;
use sqlx::SqlitePool;
use tracing::{error, instrument, warn};

type QueryRow = (
    i64,
    String,
    String,
    Option<String>,
    Option<i64>,
    Option<i64>,
    String,
    String,
);

pub struct SqliteQueryRepository {
    pool: SqlitePool,
}

impl SqliteQueryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_query(row: QueryRow) -> BackendQuery {
        let (id, method, request, response, zone_id, user_id, record_ids, created_at) = row;

        let response = response.and_then(|raw| {
            serde_json::from_str::<BackendResponse>(&raw)
                .map_err(|e| warn!(query_id = id, error = %e, "Stored response is not valid JSON"))
                .ok()
        });

        BackendQuery {
            id: Some(id),
            method: Method::from_name(&method),
            request: serde_json::from_str(&request).unwrap_or(Value::Null),
            response,
            zone_id,
            user_id,
            record_ids: serde_json::from_str(&record_ids).unwrap_or_default(),
            created_at: Some(created_at),
        }
    }
}

#[async_trait]
impl QueryRepository for SqliteQueryRepository {
    #[instrument(skip(self, query), fields(method = %query.method))]
    async fn persist_query(&self, query: &BackendQuery) -> Result<i64, DomainError> {
        let now = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

        let (id,) = sqlx::query_as::<_, (i64,)>(
            "INSERT INTO dns_query (method, request, response, zone_id, user_id, record_ids, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING id",
        )
        .bind(query.method.as_str())
        .bind(query.request.to_string())
        .bind(query.response_json())
        .bind(query.zone_id)
        .bind(query.user_id)
        .bind(query.record_ids_json())
        .bind(&now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to persist backend query");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(id)
    }

    #[instrument(skip(self))]
    async fn get_recent(&self, limit: u32) -> Result<Vec<BackendQuery>, DomainError> {
        let rows = sqlx::query_as::<_, QueryRow>(
            "SELECT id, method, request, response, zone_id, user_id, record_ids, created_at
             FROM dns_query ORDER BY id DESC LIMIT ?",
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query recent backend queries");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Self::row_to_query).collect())
    }
}
