//! Print the spendable and savings balance of each of your Starling accounts.

use clap::Parser;
use log::{debug, info};
use std::convert::TryFrom;
use std::io;

mod api;
mod cfg;
mod cli;
mod report;

use crate::api::StarlingClient;
use crate::cfg::Config;
use crate::cli::CliOpts;
use crate::report::{write_report, PROVIDER};

fn main() -> anyhow::Result<()> {
    // parse and validate the CLI arguments
    let opts = CliOpts::parse();

    // log to stderr, leaving stdout for the report
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(opts.log_filter()))
        .init();

    // the configuration must load before any request is made
    let conf = Config::try_from(&opts)?;
    debug!(
        "Loaded configuration from `{}` (default account `{}`)",
        conf.path().display(),
        conf.default_account_id()
    );

    let client = StarlingClient::new(opts.api_url(), conf.bearer_token())?;
    debug!("Querying {}", client.base_url());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let n = write_report(&client, PROVIDER, &mut out).map_err(|e| {
        match e.downcast_ref::<api::ApiError>() {
            Some(api_err) if api_err.is_auth_failure() => e.context(format!(
                "The Starling API rejected the bearer token in `{}`.",
                conf.path().display()
            )),
            _ => e,
        }
    })?;
    info!("Reported {} accounts", n);

    Ok(())
}
