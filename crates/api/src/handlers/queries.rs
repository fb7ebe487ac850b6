use crate::{
    dto::{QueryParams, QueryResponse},
    errors::ApiError,
    state::AppState,
};
use axum::{
    extract::{Query, State},
    Json,
};
use tracing::{debug, error, instrument};

#[instrument(skip(state), name = "api_get_queries")]
pub async fn get_queries(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Result<Json<Vec<QueryResponse>>, ApiError> {
    debug!(limit = params.limit, "Fetching recent backend queries");

    let queries = state.get_queries.execute(params.limit).await.map_err(|e| {
        error!(error = %e, "Failed to retrieve backend queries");
        ApiError(e)
    })?;

    debug!(count = queries.len(), "Backend queries retrieved");
    Ok(Json(queries.into_iter().map(QueryResponse::from).collect()))
}
