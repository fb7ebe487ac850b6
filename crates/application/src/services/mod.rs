mod public_suffix_table;
mod record_renderer;
mod suffix_resolver;

pub use public_suffix_table::{PublicSuffixTable, SUFFIX_CACHE_KEY};
pub use record_renderer::RecordRenderer;
pub use suffix_resolver::SuffixResolver;
