mod config;
mod logging;
mod signal;
mod zones;

pub use config::load_config;
pub use logging::init_logging;
pub use signal::wait_for_shutdown_signal;
pub use zones::seed_zones;
