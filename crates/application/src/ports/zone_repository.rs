use async_trait::async_trait;
use portare_dns_domain::{DomainError, RecordSet, Zone};

/// Write path used by the administrative side.
#[async_trait]
pub trait ZoneRepository: Send + Sync {
    /// Fails with `ZoneAlreadyExists` when a zone of that name is present.
    async fn insert_zone(&self, name: &str) -> Result<Zone, DomainError>;

    /// Fails with `ZoneNotFound` or `RecordSetAlreadyExists`. Returns the stored set with its id.
    async fn insert_record_set(
        &self,
        zone_name: &str,
        record_set: RecordSet,
    ) -> Result<RecordSet, DomainError>;

    async fn zone_count(&self) -> Result<usize, DomainError>;
}
