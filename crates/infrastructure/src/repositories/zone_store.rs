use arc_swap::ArcSwap;
use async_trait::async_trait;
use portare_dns_application::ports::{ZoneLookup, ZoneRepository};
use portare_dns_application::use_cases::dns::zone_candidates;
use portare_dns_domain::config::ZoneMatchOrder;
use portare_dns_domain::{domain_name, DomainError, RecordSet, RecordType, Zone};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

type ZoneMap = HashMap<String, Arc<Zone>>;

/// Zones held in memory. Readers take a lock-free snapshot; writers clone the
/// map, modify it and swap it in while holding `write_lock`.
///
/// `find_record_set` answers from the zone the suffix walk picks under
/// `match_order`, so both lookup modes agree on the authoritative zone.
pub struct InMemoryZoneStore {
    zones: ArcSwap<ZoneMap>,
    write_lock: Mutex<()>,
    next_id: AtomicU64,
    match_order: ZoneMatchOrder,
}

impl InMemoryZoneStore {
    pub fn new() -> Self {
        Self {
            zones: ArcSwap::from_pointee(HashMap::new()),
            write_lock: Mutex::new(()),
            next_id: AtomicU64::new(1),
            match_order: ZoneMatchOrder::default(),
        }
    }

    pub fn with_match_order(mut self, order: ZoneMatchOrder) -> Self {
        self.match_order = order;
        self
    }

    fn key(name: &str) -> String {
        domain_name::to_fqdn(name).to_ascii_lowercase()
    }

    /// First zone of the suffix walk over `name` present in the snapshot.
    fn authoritative_zone(&self, zones: &ZoneMap, name: &str) -> Option<Arc<Zone>> {
        zone_candidates(name, self.match_order)
            .iter()
            .find_map(|candidate| zones.get(&Self::key(candidate)).cloned())
    }
}

impl Default for InMemoryZoneStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ZoneLookup for InMemoryZoneStore {
    async fn find_zone(&self, name: &str) -> Result<Option<Arc<Zone>>, DomainError> {
        Ok(self.zones.load().get(&Self::key(name)).cloned())
    }

    async fn find_record_set(
        &self,
        name: &str,
        record_type: RecordType,
    ) -> Result<Option<RecordSet>, DomainError> {
        let fqdn = domain_name::to_fqdn(name);
        let zones = self.zones.load();
        Ok(self
            .authoritative_zone(&zones, &fqdn)
            .and_then(|zone| zone.find_record_set(&fqdn, record_type).cloned()))
    }
}

#[async_trait]
impl ZoneRepository for InMemoryZoneStore {
    async fn insert_zone(&self, name: &str) -> Result<Zone, DomainError> {
        let _guard = self.write_lock.lock().await;
        let key = Self::key(name);

        let current = self.zones.load_full();
        if current.contains_key(&key) {
            return Err(DomainError::ZoneAlreadyExists(domain_name::to_fqdn(name)));
        }

        let zone = Zone::new(domain_name::to_fqdn(name));
        let mut next = (*current).clone();
        next.insert(key, Arc::new(zone.clone()));
        self.zones.store(Arc::new(next));

        debug!(zone = %zone.name, "Zone stored");
        Ok(zone)
    }

    async fn insert_record_set(
        &self,
        zone_name: &str,
        mut record_set: RecordSet,
    ) -> Result<RecordSet, DomainError> {
        let _guard = self.write_lock.lock().await;
        let key = Self::key(zone_name);

        let current = self.zones.load_full();
        let zone = current
            .get(&key)
            .ok_or_else(|| DomainError::ZoneNotFound(domain_name::to_fqdn(zone_name)))?;

        if zone
            .find_record_set(&record_set.name, record_set.record_type)
            .is_some()
        {
            return Err(DomainError::RecordSetAlreadyExists {
                name: record_set.name,
                record_type: record_set.record_type.to_string(),
            });
        }

        record_set.id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let mut updated = (**zone).clone();
        updated.record_sets.push(record_set.clone());

        let mut next = (*current).clone();
        next.insert(key, Arc::new(updated));
        self.zones.store(Arc::new(next));

        debug!(
            zone = %zone.name,
            name = %record_set.name,
            record_type = %record_set.record_type,
            id = record_set.id,
            "Record set stored"
        );
        Ok(record_set)
    }

    async fn zone_count(&self) -> Result<usize, DomainError> {
        Ok(self.zones.load().len())
    }
}
