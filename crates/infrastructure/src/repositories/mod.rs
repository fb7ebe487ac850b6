pub mod query_repository;
pub mod zone_repository;

pub use query_repository::SqliteQueryRepository;
pub use zone_repository::SqliteZoneRepository;
