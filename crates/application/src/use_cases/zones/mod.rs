mod create_record_set;
mod create_zone;

pub use create_record_set::{CreateRecordSetCommand, CreateRecordSetUseCase};
pub use create_zone::CreateZoneUseCase;
