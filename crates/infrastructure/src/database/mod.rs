use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;
use tracing::info;

pub async fn create_pool(
    database_url: &str,
    max_connections: u32,
    migrations_path: &str,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    let migrator = Migrator::new(Path::new(migrations_path)).await?;
    migrator.run(&pool).await?;
    info!(migrations_path, "Database migrations applied");

    Ok(pool)
}
