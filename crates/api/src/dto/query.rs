use pdns_backend_domain::{BackendQuery, BackendResponse};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Deserialize, Debug)]
pub struct QueryParams {
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    100
}

#[derive(Serialize, Debug, Clone)]
pub struct QueryResponse {
    pub id: Option<i64>,
    pub method: String,
    pub request: Value,
    pub response: Option<BackendResponse>,
    pub zone_id: Option<i64>,
    pub user_id: Option<i64>,
    pub record_ids: Vec<i64>,
    pub created_at: Option<String>,
}

impl From<BackendQuery> for QueryResponse {
    fn from(query: BackendQuery) -> Self {
        Self {
            id: query.id,
            method: query.method.to_string(),
            request: query.request,
            response: query.response,
            zone_id: query.zone_id,
            user_id: query.user_id,
            record_ids: query.record_ids,
            created_at: query.created_at,
        }
    }
}
