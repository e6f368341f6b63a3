//! Errors raised while loading the configuration.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file `{0}` does not exist.")]
    NotFound(PathBuf),
    #[error("Cannot expand `~` in `{0}`: no home directory found.")]
    NoHomeDirectory(PathBuf),
    #[error("Error reading contents of configuration file `{path}`.")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Error parsing configuration file `{path}`.\nPlease check the configuration and try again.")]
    Malformed {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("No `[starling_config]` table found in configuration file `{0}`.\nPlease check the configuration and try again.")]
    MissingTable(PathBuf),
    #[error("Error parsing the `[starling_config]` table in configuration file `{path}`.")]
    InvalidTable {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
