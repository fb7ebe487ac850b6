use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/dnsapi", post(handlers::handle_backend_request))
        .route("/dnsapi/{*path}", post(handlers::handle_backend_request))
        .route("/queries", get(handlers::get_queries))
        .with_state(state)
}
