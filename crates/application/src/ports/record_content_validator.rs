use portare_dns_domain::{DomainError, RecordType};

/// Checks that a record's text can be encoded for its type before it is stored.
pub trait RecordContentValidator: Send + Sync {
    fn validate(&self, record_type: RecordType, content: &str) -> Result<(), DomainError>;
}
