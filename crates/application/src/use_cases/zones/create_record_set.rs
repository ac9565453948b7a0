use std::sync::Arc;

use portare_dns_domain::{domain_name, DomainError, Record, RecordClass, RecordSet, RecordType};
use tracing::info;

use crate::ports::{RecordContentValidator, ZoneRepository};

#[derive(Debug, Clone)]
pub struct CreateRecordSetCommand {
    pub zone_name: String,
    pub name: String,
    pub record_type: RecordType,
    pub record_class: RecordClass,
    pub ttl: u32,
    pub records: Vec<Record>,
}

pub struct CreateRecordSetUseCase {
    repo: Arc<dyn ZoneRepository>,
    validator: Arc<dyn RecordContentValidator>,
}

impl CreateRecordSetUseCase {
    pub fn new(repo: Arc<dyn ZoneRepository>, validator: Arc<dyn RecordContentValidator>) -> Self {
        Self { repo, validator }
    }

    pub async fn execute(&self, command: CreateRecordSetCommand) -> Result<RecordSet, DomainError> {
        let zone_name = domain_name::to_fqdn(&command.zone_name);
        let name = domain_name::to_fqdn(&command.name);
        domain_name::validate(&name)?;

        if !domain_name::is_within(&name, &zone_name) {
            return Err(DomainError::InvalidDomainName(format!(
                "{} is not inside zone {}",
                name, zone_name
            )));
        }

        for record in &command.records {
            self.validator
                .validate(command.record_type, &record.content)?;
        }

        let record_set = RecordSet::new(
            name,
            command.record_type,
            command.record_class,
            command.ttl,
            command.records,
        );

        let stored = self.repo.insert_record_set(&zone_name, record_set).await?;
        info!(
            zone = %zone_name,
            name = %stored.name,
            record_type = %stored.record_type,
            records = stored.records.len(),
            "Record set created"
        );
        Ok(stored)
    }
}
