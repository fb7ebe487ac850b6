mod exchange;
mod handle_backend_query;
mod handlers;

pub use exchange::QueryState;
pub use handle_backend_query::HandleBackendQueryUseCase;
