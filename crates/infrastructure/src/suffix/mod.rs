pub mod file_cache;
pub mod list_client;

pub use file_cache::FileSuffixCache;
pub use list_client::PublicSuffixListClient;
