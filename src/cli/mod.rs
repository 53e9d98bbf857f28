mod actions;
mod args;
mod dispatcher;


pub use args::*;
pub use dispatcher::Dispatcher;

use crate::api::{api_base_url, HttpTransport, NslClient, Transport};
use crate::config::ConfigStore;
use crate::error::BarkError;
use crate::logging;
use clap::{CommandFactory, Parser};
use std::io::Write;

const SUMMARY: &str = "CLI client for communicating with satellites using the NearSpace Launch API";

pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.verbose);

    let stdout = std::io::stdout();
    run_cli_with(
        cli,
        ConfigStore::from_env,
        HttpTransport::new(),
        &mut stdout.lock(),
    )
}

/// Runs a parsed invocation. The config store is only located once there is
/// an action to run, so printing help never touches the filesystem.
pub fn run_cli_with<T: Transport>(
    cli: Cli,
    locate_store: impl FnOnce() -> Result<ConfigStore, BarkError>,
    transport: T,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let actions = cli.actions();
    if actions.is_empty() {
        let help = Cli::command().render_help().to_string();
        writeln!(out, "{}", help.trim_end())?;
        return Ok(());
    }

    let store = locate_store()?;
    tracing::debug!(path = %store.path().display(), "using config file");

    let client = NslClient::new(api_base_url(), transport);
    let mut dispatcher = Dispatcher::new(store, client);
    dispatcher.run(&actions, out)
}
