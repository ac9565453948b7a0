use std::sync::Arc;

use portare_dns_domain::{domain_name, DomainError, Zone};
use tracing::info;

use crate::ports::ZoneRepository;

pub struct CreateZoneUseCase {
    repo: Arc<dyn ZoneRepository>,
}

impl CreateZoneUseCase {
    pub fn new(repo: Arc<dyn ZoneRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, name: &str) -> Result<Zone, DomainError> {
        let fqdn = domain_name::to_fqdn(name);
        if fqdn == "." {
            return Err(DomainError::InvalidDomainName(
                "Zone name cannot be empty".to_string(),
            ));
        }
        domain_name::validate(&fqdn)?;

        let zone = self.repo.insert_zone(&fqdn).await?;
        info!(zone = %zone.name, "Zone created");
        Ok(zone)
    }
}
