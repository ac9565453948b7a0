pub mod zone_store;

pub use zone_store::InMemoryZoneStore;
