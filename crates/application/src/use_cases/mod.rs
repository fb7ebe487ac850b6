pub mod backend;
pub mod queries;

pub use backend::HandleBackendQueryUseCase;
pub use queries::GetRecentQueriesUseCase;
