//! Server configuration
//!
//! Sources, later overrides earlier:
//! - built-in defaults
//! - YAML file (`FileConfigProvider`, `~/.config/domcp/config.yaml`)
//! - environment (`SERVICES`, `DIGITALOCEAN_API_ENDPOINT`, `LOG_LEVEL`)
//! - command-line flags, applied by the binary

mod error;
mod file;
mod server;

pub use error::{ConfigError, ConfigResult};
pub use file::{default_config_path, ConfigFile, FileConfigProvider};
pub use server::{
    parse_log_level, split_service_list, ServerConfig, API_ENDPOINT_ENV, LOG_LEVEL_ENV, SERVICES_ENV,
};
