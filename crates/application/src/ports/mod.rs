mod query_repository;
mod suffix_cache_port;
mod suffix_list_source;
mod zone_repository;

pub use query_repository::QueryRepository;
pub use suffix_cache_port::SuffixCachePort;
pub use suffix_list_source::SuffixListSource;
pub use zone_repository::ZoneRepository;
