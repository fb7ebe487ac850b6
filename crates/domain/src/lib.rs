//! PowerDNS Remote Backend Domain Layer
pub mod backend_method;
pub mod backend_protocol;
pub mod backend_query;
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod parsed_host;
pub mod suffix_table;
pub mod zone;

pub use backend_method::Method;
pub use backend_protocol::{BackendRequest, BackendResponse, BackendResult, ResponseRecord};
pub use backend_query::BackendQuery;
pub use config::{CliOverrides, Config};
pub use dns_record::{Record, RecordType};
pub use errors::DomainError;
pub use parsed_host::ParsedHost;
pub use suffix_table::SuffixTable;
pub use zone::Zone;
