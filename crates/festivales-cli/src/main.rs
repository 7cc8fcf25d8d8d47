use anyhow::Result;
use clap::Parser;
use festivales_core::SystemClock;

mod commands;
mod config;

use config::Config;

/// Parse the sample festivals and print the festival catalog.
///
/// Settings come from ~/.config/festivales/config.toml and FEST_* environment
/// variables; see `config.rs` for the available keys.
#[derive(Debug, Parser)]
#[command(name = "festivales", version, about)]
struct Cli {}

fn main() -> Result<()> {
    Cli::parse();

    let config = Config::load()?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();
    log::debug!("Using config file {}", config::config_file_path().display());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run_demo(&mut out, &config, &SystemClock)
}
