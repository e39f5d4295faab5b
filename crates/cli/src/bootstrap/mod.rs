mod config;
mod logging;
mod zones;

pub use config::load_config;
pub use logging::init_logging;
pub use zones::load_zones;
