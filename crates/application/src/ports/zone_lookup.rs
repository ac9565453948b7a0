use async_trait::async_trait;
use portare_dns_domain::{DomainError, RecordSet, RecordType, Zone};
use std::sync::Arc;

/// Read path to the zone database.
///
/// `Ok(None)` is a definite "not found"; any `Err` means the collaborator could
/// not answer and the query is failed with `ServFail`.
#[async_trait]
pub trait ZoneLookup: Send + Sync {
    /// Exact-name zone lookup. `name` is an FQDN.
    async fn find_zone(&self, name: &str) -> Result<Option<Arc<Zone>>, DomainError>;

    /// RRset lookup by owner name and type, records embedded.
    async fn find_record_set(
        &self,
        name: &str,
        record_type: RecordType,
    ) -> Result<Option<RecordSet>, DomainError>;
}
