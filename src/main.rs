mod config;
mod export;
mod form;
mod logging;
mod models;
mod run;
mod stats;
mod store;
mod ui;

use anyhow::Result;
use clap::Parser;

const DB_FILE: &str = "finboard.db";

fn main() -> Result<()> {
    let cli = run::Cli::parse();
    let config = config::Config::load()?;
    let data_dir = config.resolve_data_dir()?;
    logging::init(&data_dir, &config.log_filter)?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        data_dir = %data_dir.display(),
        "starting finboard"
    );

    let mut ledger = store::Ledger::open(&data_dir.join(DB_FILE))?;

    match cli.command {
        None | Some(run::Command::Tui) => run::as_tui(&mut ledger, &config),
        Some(command) => run::as_cli(command, &mut ledger, &config),
    }
}
