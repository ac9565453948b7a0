//! Portare DNS Domain Layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod domain_name;
pub mod errors;
pub mod response_code;
pub mod zone;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_query::DnsQuery;
pub use dns_record::{Record, RecordClass, RecordSet, RecordType};
pub use errors::DomainError;
pub use response_code::ResponseCode;
pub use zone::Zone;
