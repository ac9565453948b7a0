use super::zone_candidates::zone_candidates;
use crate::ports::ZoneLookup;
use portare_dns_domain::config::{LookupMode, ResolverConfig, ZoneMatchOrder};
use portare_dns_domain::{DnsQuery, DomainError, RecordSet, RecordType, ResponseCode, Zone};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Outcome of a successful lookup round. Collaborator failures are `Err` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneResolution {
    pub response_code: ResponseCode,
    /// Name of the zone that matched, when the zone walk ran and found one.
    pub zone: Option<String>,
    /// Matching record sets with disabled records already removed. Never holds an empty set.
    pub record_sets: Vec<RecordSet>,
}

impl ZoneResolution {
    pub fn answered(zone: Option<String>, record_sets: Vec<RecordSet>) -> Self {
        Self {
            response_code: ResponseCode::NoError,
            zone,
            record_sets,
        }
    }

    pub fn not_zone() -> Self {
        Self {
            response_code: ResponseCode::NotZone,
            zone: None,
            record_sets: vec![],
        }
    }

    pub fn nx_domain(zone: Option<String>) -> Self {
        Self {
            response_code: ResponseCode::NXDomain,
            zone,
            record_sets: vec![],
        }
    }

    pub fn answer_count(&self) -> usize {
        self.record_sets.iter().map(|rs| rs.records.len()).sum()
    }
}

pub struct ResolveQueryUseCase {
    lookup: Arc<dyn ZoneLookup>,
    match_order: ZoneMatchOrder,
    mode: LookupMode,
    timeout: Duration,
}

impl ResolveQueryUseCase {
    pub fn new(lookup: Arc<dyn ZoneLookup>) -> Self {
        Self::from_config(lookup, &ResolverConfig::default())
    }

    pub fn from_config(lookup: Arc<dyn ZoneLookup>, config: &ResolverConfig) -> Self {
        Self {
            lookup,
            match_order: config.zone_match_order,
            mode: config.lookup_mode,
            timeout: Duration::from_millis(config.lookup_timeout_ms),
        }
    }

    pub fn with_match_order(mut self, order: ZoneMatchOrder) -> Self {
        self.match_order = order;
        self
    }

    pub fn with_mode(mut self, mode: LookupMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Resolves a query against the zone database within the configured timeout.
    pub async fn execute(&self, query: &DnsQuery) -> Result<ZoneResolution, DomainError> {
        match tokio::time::timeout(self.timeout, self.resolve(query)).await {
            Ok(result) => result,
            Err(_) => Err(DomainError::LookupTimeout(self.timeout.as_millis() as u64)),
        }
    }

    async fn resolve(&self, query: &DnsQuery) -> Result<ZoneResolution, DomainError> {
        // A single RRset can never answer ANY, so ANY always walks the zones.
        if self.mode == LookupMode::RecordSet && query.record_type != RecordType::ANY {
            return self.resolve_by_record_set(query).await;
        }
        self.resolve_by_zone_walk(query).await
    }

    async fn resolve_by_zone_walk(&self, query: &DnsQuery) -> Result<ZoneResolution, DomainError> {
        let zone = match self.find_authoritative_zone(&query.domain).await? {
            Some(zone) => zone,
            None => {
                debug!(domain = %query.domain, "No zone for query");
                return Ok(ZoneResolution::not_zone());
            }
        };

        let record_sets: Vec<RecordSet> = zone
            .select(&query.domain, query.record_type)
            .filter_map(without_disabled)
            .collect();

        debug!(
            domain = %query.domain,
            zone = %zone.name,
            record_type = %query.record_type,
            record_sets = record_sets.len(),
            "Zone selected"
        );

        if record_sets.is_empty() {
            Ok(ZoneResolution::nx_domain(Some(zone.name.clone())))
        } else {
            Ok(ZoneResolution::answered(Some(zone.name.clone()), record_sets))
        }
    }

    async fn resolve_by_record_set(
        &self,
        query: &DnsQuery,
    ) -> Result<ZoneResolution, DomainError> {
        let found = self
            .lookup
            .find_record_set(&query.domain, query.record_type)
            .await?;

        match found {
            Some(record_set) => match without_disabled(&record_set) {
                Some(enabled) => Ok(ZoneResolution::answered(None, vec![enabled])),
                None => Ok(ZoneResolution::nx_domain(None)),
            },
            None => {
                // The miss alone cannot tell a missing zone from a missing RRset.
                match self.find_authoritative_zone(&query.domain).await? {
                    Some(zone) => Ok(ZoneResolution::nx_domain(Some(zone.name.clone()))),
                    None => Ok(ZoneResolution::not_zone()),
                }
            }
        }
    }

    /// Suffix walk: the first candidate the collaborator knows wins.
    pub async fn find_authoritative_zone(
        &self,
        name: &str,
    ) -> Result<Option<Arc<Zone>>, DomainError> {
        for candidate in zone_candidates(name, self.match_order) {
            if let Some(zone) = self.lookup.find_zone(&candidate).await? {
                return Ok(Some(zone));
            }
        }
        Ok(None)
    }
}

fn without_disabled(record_set: &RecordSet) -> Option<RecordSet> {
    if !record_set.has_enabled_records() {
        return None;
    }
    let mut enabled = record_set.clone();
    enabled.records.retain(|r| !r.is_disabled);
    Some(enabled)
}
