pub mod config;
pub mod paths;
pub mod settings;

pub use config::{Config, ConfigError, LoggingConfig, ServerConfig, DEFAULT_BASE_URL};
pub use paths::{PathManager, container_base_path};
pub use settings::SettingsStore;
