use pdns_backend_application::use_cases::{GetRecentQueriesUseCase, HandleBackendQueryUseCase};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<HandleBackendQueryUseCase>,
    pub get_queries: Arc<GetRecentQueriesUseCase>,
}
