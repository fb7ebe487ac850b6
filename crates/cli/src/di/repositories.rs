use pdns_backend_infrastructure::repositories::{SqliteQueryRepository, SqliteZoneRepository};
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pub zones: Arc<SqliteZoneRepository>,
    pub queries: Arc<SqliteQueryRepository>,
}

impl Repositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            zones: Arc::new(SqliteZoneRepository::new(pool.clone())),
            queries: Arc::new(SqliteQueryRepository::new(pool)),
        }
    }
}
