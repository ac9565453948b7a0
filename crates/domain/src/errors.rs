use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid record content: {0}")]
    InvalidRecordContent(String),

    #[error("Zone not found: {0}")]
    ZoneNotFound(String),

    #[error("Zone already exists: {0}")]
    ZoneAlreadyExists(String),

    #[error("Record set already exists: {name} {record_type}")]
    RecordSetAlreadyExists { name: String, record_type: String },

    #[error("Zone lookup failed: {0}")]
    LookupFailed(String),

    #[error("Zone lookup timed out after {0} ms")]
    LookupTimeout(u64),
}
