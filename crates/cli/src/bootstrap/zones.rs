use portare_dns_application::ports::ZoneRepository;
use portare_dns_application::use_cases::{
    CreateRecordSetCommand, CreateRecordSetUseCase, CreateZoneUseCase,
};
use portare_dns_domain::config::{RecordSetEntry, ZoneEntry};
use portare_dns_domain::{Config, DomainError, Record, RecordClass, RecordType};
use portare_dns_infrastructure::dns::RdataEncoder;
use portare_dns_infrastructure::repositories::InMemoryZoneStore;
use std::sync::Arc;
use tracing::{info, warn};

/// Builds the zone store from `[[zones]]`. Invalid entries are logged and skipped.
pub async fn seed_zones(config: &Config) -> anyhow::Result<Arc<InMemoryZoneStore>> {
    let store = Arc::new(
        InMemoryZoneStore::new().with_match_order(config.resolver.zone_match_order),
    );
    let create_zone = CreateZoneUseCase::new(store.clone());
    let create_record_set = CreateRecordSetUseCase::new(store.clone(), Arc::new(RdataEncoder));

    let mut record_sets = 0usize;
    for zone in &config.zones {
        match create_zone.execute(&zone.name).await {
            Ok(_) | Err(DomainError::ZoneAlreadyExists(_)) => {}
            Err(e) => {
                warn!(zone = %zone.name, error = %e, "Skipping zone");
                continue;
            }
        }

        for entry in &zone.record_sets {
            let Some(command) = to_command(zone, entry) else {
                continue;
            };
            match create_record_set.execute(command).await {
                Ok(_) => record_sets += 1,
                Err(e) => {
                    warn!(zone = %zone.name, name = %entry.name, error = %e, "Skipping record set");
                }
            }
        }
    }

    info!(
        zones = store.zone_count().await?,
        record_sets, "Zone store loaded"
    );
    Ok(store)
}

fn to_command(zone: &ZoneEntry, entry: &RecordSetEntry) -> Option<CreateRecordSetCommand> {
    let record_type = match entry.record_type.parse::<RecordType>() {
        Ok(t) => t,
        Err(e) => {
            warn!(zone = %zone.name, name = %entry.name, error = %e, "Skipping record set");
            return None;
        }
    };
    let record_class = match entry.class.parse::<RecordClass>() {
        Ok(c) => c,
        Err(e) => {
            warn!(zone = %zone.name, name = %entry.name, error = %e, "Skipping record set");
            return None;
        }
    };

    let records = entry
        .records
        .iter()
        .map(|r| Record {
            content: r.content.clone(),
            is_disabled: r.disabled,
        })
        .collect();

    Some(CreateRecordSetCommand {
        zone_name: zone.name.clone(),
        name: entry.name.clone(),
        record_type,
        record_class,
        ttl: entry.ttl,
        records,
    })
}
