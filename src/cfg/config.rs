//! Account access configuration.

use serde::Deserialize;
use starling_utils::expand_tilde;
use std::convert::TryFrom;
use std::fs;
use std::path::{Path, PathBuf};
use toml::Value;

use crate::cfg::ConfigError;
use crate::cli::CliOpts;

/// Name of the table holding the Starling credentials
const STARLING_TABLE: &str = "starling_config";

/// Contents of the `[starling_config]` table.
/// Neither field is validated; an empty token surfaces as an API error.
#[derive(Debug, Default, Deserialize, PartialEq)]
struct StarlingConfig {
    #[serde(default)]
    bearer_token: String,
    #[serde(default)]
    account_id: String,
}

/// Program configuration
#[derive(Debug)]
pub struct Config {
    /// Path of the config file, with any `~` expanded
    path: PathBuf,

    /// Starling credentials
    starling: StarlingConfig,
}

impl Config {
    /// Load and parse the config file at the given path
    pub fn new_from_path(path: &Path) -> Result<Self, ConfigError> {
        let path = expand_tilde(path).ok_or_else(|| ConfigError::NoHomeDirectory(path.to_path_buf()))?;

        if !path.exists() {
            return Err(ConfigError::NotFound(path));
        }

        let config_str = match fs::read_to_string(&path) {
            Ok(s) => s,
            Err(source) => return Err(ConfigError::Unreadable { path, source }),
        };

        Config::from_toml_str(path, &config_str)
    }

    /// Parse the contents of a config file
    fn from_toml_str(path: PathBuf, config_str: &str) -> Result<Self, ConfigError> {
        let config_toml = match config_str.parse::<Value>() {
            Ok(Value::Table(t)) => t,
            Ok(_) => return Err(ConfigError::MissingTable(path)),
            Err(source) => return Err(ConfigError::Malformed { path, source }),
        };

        let starling = match config_toml.get(STARLING_TABLE) {
            Some(table @ Value::Table(_)) => match StarlingConfig::deserialize(table.clone()) {
                Ok(s) => s,
                Err(source) => return Err(ConfigError::InvalidTable { path, source }),
            },
            _ => return Err(ConfigError::MissingTable(path)),
        };

        Ok(Config { path, starling })
    }

    /// Get the path of the config file
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    /// The bearer credential, sent verbatim in the `Authorization` header
    pub fn bearer_token(&self) -> &str {
        &self.starling.bearer_token
    }

    /// The configured default account.
    pub fn default_account_id(&self) -> &str {
        &self.starling.account_id
    }
}

impl TryFrom<&CliOpts> for Config {
    type Error = ConfigError;

    fn try_from(opts: &CliOpts) -> Result<Self, Self::Error> {
        Config::new_from_path(opts.config())
    }
}
