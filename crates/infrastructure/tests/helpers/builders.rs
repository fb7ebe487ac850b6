#![allow(dead_code)]

use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

const SCHEMA: &str = include_str!("../../../../migrations/001_initial_schema.sql");

pub async fn create_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    sqlx::raw_sql(SCHEMA).execute(&pool).await.unwrap();
    pool
}

pub async fn insert_zone(pool: &SqlitePool, name: &str, name_servers: &str, is_active: bool) -> i64 {
    let (id,) = sqlx::query_as::<_, (i64,)>(
        "INSERT INTO dns_zone (user_id, name, name_servers, serial, is_active)
         VALUES (42, ?, ?, 2024010101, ?)
         RETURNING id",
    )
    .bind(name)
    .bind(name_servers)
    .bind(if is_active { 1i64 } else { 0i64 })
    .fetch_one(pool)
    .await
    .unwrap();
    id
}

pub async fn insert_record(
    pool: &SqlitePool,
    zone_id: i64,
    host: &str,
    record_type: &str,
    target: &str,
    is_active: bool,
) -> i64 {
    let (id,) = sqlx::query_as::<_, (i64,)>(
        "INSERT INTO dns_record (zone_id, host, type, target, ttl, priority, is_active)
         VALUES (?, ?, ?, ?, 300, 10, ?)
         RETURNING id",
    )
    .bind(zone_id)
    .bind(host)
    .bind(record_type)
    .bind(target)
    .bind(if is_active { 1i64 } else { 0i64 })
    .fetch_one(pool)
    .await
    .unwrap();
    id
}

pub async fn insert_suffix(pool: &SqlitePool, name: &str) {
    sqlx::query("INSERT INTO dns_domain_tld (name) VALUES (?)")
        .bind(name)
        .execute(pool)
        .await
        .unwrap();
}
