use crate::state::AppState;
use axum::{body::Bytes, extract::State, Json};
use pdns_backend_domain::BackendResponse;
use tracing::{debug, instrument};

/// One envelope per HTTP request. The engine always produces a response,
/// so the status is 200 even when `result` is false.
#[instrument(skip(state, body), name = "api_backend_request", fields(len = body.len()))]
pub async fn handle_backend_request(
    State(state): State<AppState>,
    body: Bytes,
) -> Json<BackendResponse> {
    let response = state.engine.execute_raw(&body).await;
    debug!(result = ?response.result.as_flag(), "Backend request answered");
    Json(response)
}
