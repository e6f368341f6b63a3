//! Utilities to locate the configuration.

use clap::crate_name;
use dirs_next::{config_dir, home_dir};
use std::path::PathBuf;

/// Directory holding this program's configuration, `$XDG_CONFIG_HOME/<name>`.
/// Falls back to `$HOME/.config/<name>` when the platform has no config directory.
pub(crate) fn get_config_dir() -> Option<PathBuf> {
    let mut dir = match config_dir() {
        Some(dir) => dir,
        None => home_dir()?.join(".config"),
    };
    dir.push(crate_name!().replace('_', "-"));

    Some(dir)
}

/// Default location of the configuration file
pub fn get_config_path() -> PathBuf {
    match get_config_dir() {
        Some(dir) => dir.join("config.toml"),
        None => PathBuf::from("config.toml"),
    }
}
