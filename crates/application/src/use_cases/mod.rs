pub mod dns;
pub mod zones;

// Re-export use cases
pub use dns::{ResolveQueryUseCase, ZoneResolution};
pub use zones::{CreateRecordSetCommand, CreateRecordSetUseCase, CreateZoneUseCase};
