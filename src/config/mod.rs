mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApplicationConfig, Config, LoggingConfig, StoreConfig};
