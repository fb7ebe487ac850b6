pub mod query;

pub use query::{QueryParams, QueryResponse};
