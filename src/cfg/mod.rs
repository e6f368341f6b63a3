//! Load, parse, and locate the reporter's configuration.

mod config;
mod error;
mod utils;

pub use self::config::Config;
pub use self::error::ConfigError;
pub use self::utils::get_config_path;
