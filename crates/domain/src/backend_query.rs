use crate::{BackendRequest, BackendResponse, Method};
use serde_json::Value;

/// Audit row for one request/response exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendQuery {
    pub id: Option<i64>,
    pub method: Method,
    pub request: Value,
    pub response: Option<BackendResponse>,
    pub zone_id: Option<i64>,
    pub user_id: Option<i64>,
    pub record_ids: Vec<i64>,
    pub created_at: Option<String>,
}

impl BackendQuery {
    pub fn from_request(request: &BackendRequest) -> Self {
        Self {
            id: None,
            method: request.method(),
            request: serde_json::to_value(request).unwrap_or(Value::Null),
            response: None,
            zone_id: None,
            user_id: None,
            record_ids: Vec::new(),
            created_at: None,
        }
    }

    /// Audit row for a payload that never decoded into a request. The
    /// method name is empty; the request keeps the payload as JSON when it
    /// parses, otherwise as a string.
    pub fn from_payload(payload: &[u8]) -> Self {
        let request = serde_json::from_slice(payload)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(payload).into_owned()));
        Self {
            id: None,
            method: Method::Unknown(String::new()),
            request,
            response: None,
            zone_id: None,
            user_id: None,
            record_ids: Vec::new(),
            created_at: None,
        }
    }

    pub fn record_ids_json(&self) -> String {
        serde_json::to_string(&self.record_ids).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn response_json(&self) -> Option<String> {
        self.response
            .as_ref()
            .and_then(|r| serde_json::to_string(r).ok())
    }
}
