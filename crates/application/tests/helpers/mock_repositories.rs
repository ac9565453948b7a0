#![allow(dead_code)]

use async_trait::async_trait;
use portare_dns_application::ports::{RecordContentValidator, ZoneLookup, ZoneRepository};
use portare_dns_domain::{DomainError, RecordSet, RecordType, Zone};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// Zone database double. Counts calls and can be told to fail or stall.
#[derive(Clone)]
pub struct MockZoneLookup {
    zones: Arc<RwLock<HashMap<String, Arc<Zone>>>>,
    should_fail: Arc<RwLock<bool>>,
    delay: Arc<RwLock<Option<Duration>>>,
    zone_calls: Arc<AtomicUsize>,
    record_set_calls: Arc<AtomicUsize>,
    zone_requests: Arc<std::sync::Mutex<Vec<String>>>,
}

impl MockZoneLookup {
    pub fn new() -> Self {
        Self {
            zones: Arc::new(RwLock::new(HashMap::new())),
            should_fail: Arc::new(RwLock::new(false)),
            delay: Arc::new(RwLock::new(None)),
            zone_calls: Arc::new(AtomicUsize::new(0)),
            record_set_calls: Arc::new(AtomicUsize::new(0)),
            zone_requests: Arc::new(std::sync::Mutex::new(Vec::new())),
        }
    }

    pub async fn with_zones(zones: Vec<Zone>) -> Self {
        let mock = Self::new();
        for zone in zones {
            mock.add_zone(zone).await;
        }
        mock
    }

    pub async fn add_zone(&self, zone: Zone) {
        self.zones
            .write()
            .await
            .insert(zone.name.to_ascii_lowercase(), Arc::new(zone));
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    pub async fn set_delay(&self, delay: Duration) {
        *self.delay.write().await = Some(delay);
    }

    pub fn zone_calls(&self) -> usize {
        self.zone_calls.load(Ordering::SeqCst)
    }

    pub fn record_set_calls(&self) -> usize {
        self.record_set_calls.load(Ordering::SeqCst)
    }

    pub fn zone_requests(&self) -> Vec<String> {
        self.zone_requests.lock().unwrap().clone()
    }

    async fn before_call(&self) -> Result<(), DomainError> {
        if let Some(delay) = *self.delay.read().await {
            tokio::time::sleep(delay).await;
        }
        if *self.should_fail.read().await {
            return Err(DomainError::LookupFailed("Mock lookup failed".to_string()));
        }
        Ok(())
    }
}

impl Default for MockZoneLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ZoneLookup for MockZoneLookup {
    async fn find_zone(&self, name: &str) -> Result<Option<Arc<Zone>>, DomainError> {
        self.zone_calls.fetch_add(1, Ordering::SeqCst);
        self.zone_requests.lock().unwrap().push(name.to_string());
        self.before_call().await?;
        Ok(self
            .zones
            .read()
            .await
            .get(&name.to_ascii_lowercase())
            .cloned())
    }

    async fn find_record_set(
        &self,
        name: &str,
        record_type: RecordType,
    ) -> Result<Option<RecordSet>, DomainError> {
        self.record_set_calls.fetch_add(1, Ordering::SeqCst);
        self.before_call().await?;
        let zones = self.zones.read().await;
        Ok(zones
            .values()
            .find_map(|zone| zone.find_record_set(name, record_type).cloned()))
    }
}

/// Write-side double backed by a plain map.
#[derive(Clone)]
pub struct MockZoneRepository {
    zones: Arc<RwLock<HashMap<String, Zone>>>,
    next_id: Arc<AtomicUsize>,
}

impl MockZoneRepository {
    pub fn new() -> Self {
        Self {
            zones: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicUsize::new(1)),
        }
    }

    pub async fn get_zone(&self, name: &str) -> Option<Zone> {
        self.zones.read().await.get(name).cloned()
    }
}

impl Default for MockZoneRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ZoneRepository for MockZoneRepository {
    async fn insert_zone(&self, name: &str) -> Result<Zone, DomainError> {
        let mut zones = self.zones.write().await;
        if zones.contains_key(name) {
            return Err(DomainError::ZoneAlreadyExists(name.to_string()));
        }
        let zone = Zone::new(name);
        zones.insert(name.to_string(), zone.clone());
        Ok(zone)
    }

    async fn insert_record_set(
        &self,
        zone_name: &str,
        mut record_set: RecordSet,
    ) -> Result<RecordSet, DomainError> {
        let mut zones = self.zones.write().await;
        let zone = zones
            .get_mut(zone_name)
            .ok_or_else(|| DomainError::ZoneNotFound(zone_name.to_string()))?;
        if zone
            .find_record_set(&record_set.name, record_set.record_type)
            .is_some()
        {
            return Err(DomainError::RecordSetAlreadyExists {
                name: record_set.name,
                record_type: record_set.record_type.to_string(),
            });
        }
        record_set.id = self.next_id.fetch_add(1, Ordering::SeqCst) as u64;
        zone.record_sets.push(record_set.clone());
        Ok(record_set)
    }

    async fn zone_count(&self) -> Result<usize, DomainError> {
        Ok(self.zones.read().await.len())
    }
}

/// Accepts everything except content listed as rejected.
pub struct MockContentValidator {
    rejected: Vec<String>,
}

impl MockContentValidator {
    pub fn accept_all() -> Self {
        Self { rejected: vec![] }
    }

    pub fn rejecting(content: &[&str]) -> Self {
        Self {
            rejected: content.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl RecordContentValidator for MockContentValidator {
    fn validate(&self, _record_type: RecordType, content: &str) -> Result<(), DomainError> {
        if self.rejected.iter().any(|r| r == content) {
            return Err(DomainError::InvalidRecordContent(content.to_string()));
        }
        Ok(())
    }
}
