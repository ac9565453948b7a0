pub mod errors;
pub mod logging;
pub mod resolver;
pub mod root;
pub mod server;
pub mod zones;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolver::{DispatchMode, LookupMode, ResolverConfig, ZoneMatchOrder};
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use zones::{RecordEntry, RecordSetEntry, ZoneEntry};
