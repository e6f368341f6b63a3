//! Command line interface configuration.

use clap::Parser;
use lazy_static::lazy_static;
use std::path::{Path, PathBuf};

use crate::api::STARLING_API;
use crate::cfg::get_config_path;

lazy_static! {
    static ref DEFAULT_CFG_PATH: PathBuf = get_config_path();
}

#[derive(Debug, Parser)]
#[clap(author, about, version)]
pub(crate) struct CliOpts {
    #[clap(
        short,
        long,
        env = "STARLING_BALANCE_CONFIG",
        value_name = "CONF",
        help = "Configuration file with the Starling access token.",
        default_value_os = DEFAULT_CFG_PATH.as_os_str()
    )]
    config: PathBuf,

    #[clap(
        long,
        env = "STARLING_API_URL",
        value_name = "URL",
        help = "Base URL of the Starling API.",
        default_value = STARLING_API
    )]
    api_url: String,

    #[clap(
        short,
        long,
        parse(from_occurrences),
        help = "Log more details to stderr. Repeat for more."
    )]
    verbose: u8,
}

impl CliOpts {
    /// Retrieve the config file path
    pub fn config(&self) -> &Path {
        &self.config
    }

    /// Retrieve the base URL of the API
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Default log filter for the requested verbosity
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
