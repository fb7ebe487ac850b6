pub mod backend;
pub mod health;
pub mod queries;

pub use backend::handle_backend_request;
pub use health::health_check;
pub use queries::get_queries;
