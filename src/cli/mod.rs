pub mod commands;

use std::path::PathBuf;

use tracing::info;

use crate::io::config_io::load_config;
use crate::io::fixture::load_fixture;
use crate::io::logging::init_logging;
use crate::model::config::AppConfig;
use crate::model::store::Store;

use commands::Cli;

/// Everything resolved before the terminal is taken over
#[derive(Debug)]
pub struct Startup {
    pub config: AppConfig,
    pub store: Store,
}

/// Resolve config, install logging and load the fixture.
/// Any failure here is a startup fault and aborts the run.
pub fn prepare(cli: &Cli) -> Result<Startup, Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let config = load_config(cli.config.as_deref(), &cwd)?;
    init_logging(&config.log, cli.log_file.as_deref())?;

    let fixture: Option<PathBuf> = cli.fixture.clone().or_else(|| config.fixture.clone());
    let store = match fixture {
        Some(path) => load_fixture(&path)?,
        None => Store::new(),
    };
    info!(lists = store.len(), "starting session");
    Ok(Startup { config, store })
}

/// Entry point used by `main`
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let startup = prepare(&cli)?;
    crate::tui::run(startup.store, &startup.config)
}
