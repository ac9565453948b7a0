mod record_content_validator;
mod zone_lookup;
mod zone_repository;

pub use record_content_validator::RecordContentValidator;
pub use zone_lookup::ZoneLookup;
pub use zone_repository::ZoneRepository;

// Re-export for convenience
pub use portare_dns_domain::DnsQuery;
