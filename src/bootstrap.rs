// src/bootstrap.rs
use anyhow::Result;
use clap::Parser;
use jid_sort_infra::{
    console::{ConsoleDiagnostics, ConsolePrinter},
    filesystem::LocalListStore,
};
use jid_sort_usecase::{SortJidList, SortOutcome};
use log::info;

use crate::{cli::Args, config::Config};

pub fn load_config() -> Config {
    Config::from(Args::parse())
}

/// `RUST_LOG` wins over `--verbose`. Safe to call more than once.
pub fn init_logging(config: &Config) {
    let _ = env_logger::Builder::new()
        .filter_level(config.log_level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}

pub fn run() -> Result<SortOutcome> {
    let config = load_config();
    init_logging(&config);
    run_with_config(&config)
}

pub fn run_with_config(config: &Config) -> Result<SortOutcome> {
    let store = LocalListStore::new();
    let diagnostics = ConsoleDiagnostics::stdout();
    let printer = ConsolePrinter::stdout();
    let usecase = SortJidList::new(&store, &diagnostics, &printer);

    let outcome = usecase.run(&config.to_request())?;
    info!(
        "sorted {} entries, skipped {} lines in {}",
        outcome.sorted,
        outcome.skipped,
        config.path().display()
    );
    Ok(outcome)
}
