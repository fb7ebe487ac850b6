mod helpers;

use helpers::create_test_db;
use pdns_backend_application::ports::QueryRepository;
use pdns_backend_domain::{BackendQuery, BackendRequest, BackendResponse, BackendResult, Method};
use pdns_backend_infrastructure::database::create_pool;
use pdns_backend_infrastructure::repositories::SqliteQueryRepository;
use serde_json::json;

fn sample_query() -> BackendQuery {
    let request = BackendRequest::new("lookup", json!({"qname": "www.example.com", "qtype": "A"}));
    let mut query = BackendQuery::from_request(&request);
    query.zone_id = Some(7);
    query.user_id = Some(42);
    query.record_ids = vec![3, 5];
    query.response = Some(BackendResponse {
        result: BackendResult::Flag(false),
        log: vec!["Zone [example.com] Has No Records".to_string()],
    });
    query
}

#[tokio::test]
async fn test_persist_query_returns_increasing_ids() {
    let repo = SqliteQueryRepository::new(create_test_db().await);

    let first = repo.persist_query(&sample_query()).await.unwrap();
    let second = repo.persist_query(&sample_query()).await.unwrap();

    assert!(second > first);
}

#[tokio::test]
async fn test_persisted_query_round_trips_through_get_recent() {
    let repo = SqliteQueryRepository::new(create_test_db().await);
    let id = repo.persist_query(&sample_query()).await.unwrap();

    let recent = repo.get_recent(10).await.unwrap();

    assert_eq!(recent.len(), 1);
    let stored = &recent[0];
    assert_eq!(stored.id, Some(id));
    assert_eq!(stored.method, Method::Lookup);
    assert_eq!(stored.request["parameters"]["qname"], json!("www.example.com"));
    assert_eq!(stored.zone_id, Some(7));
    assert_eq!(stored.user_id, Some(42));
    assert_eq!(stored.record_ids, vec![3, 5]);
    assert_eq!(stored.response, sample_query().response);
    assert!(stored.created_at.is_some());
}

#[tokio::test]
async fn test_get_recent_is_newest_first_and_limited() {
    let repo = SqliteQueryRepository::new(create_test_db().await);
    let mut ids = Vec::new();
    for _ in 0..5 {
        ids.push(repo.persist_query(&sample_query()).await.unwrap());
    }

    let recent = repo.get_recent(3).await.unwrap();

    let recent_ids: Vec<i64> = recent.iter().filter_map(|q| q.id).collect();
    assert_eq!(recent_ids, vec![ids[4], ids[3], ids[2]]);
}

#[tokio::test]
async fn test_unsupported_method_is_stored_lower_cased() {
    let repo = SqliteQueryRepository::new(create_test_db().await);
    let query = BackendQuery::from_request(&BackendRequest::new("FooBar", json!({})));

    repo.persist_query(&query).await.unwrap();

    let recent = repo.get_recent(1).await.unwrap();
    assert_eq!(recent[0].method, Method::Unknown("foobar".to_string()));
    assert!(recent[0].response.is_none());
    assert!(recent[0].record_ids.is_empty());
}

#[tokio::test]
async fn test_create_pool_applies_migrations() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite:{}", dir.path().join("backend.db").display());
    let migrations = concat!(env!("CARGO_MANIFEST_DIR"), "/../../migrations");

    let pool = create_pool(&url, 1, migrations).await.unwrap();
    let repo = SqliteQueryRepository::new(pool);

    assert!(repo.persist_query(&sample_query()).await.is_ok());
}
