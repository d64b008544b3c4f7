//! rBiccame library root.
//! Exposes the CLI parser, the high-level run() function, and the scrape /
//! merge / export modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod scrape;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Merge { .. } => cli::commands::merge::handle(&cli.command, cfg),
        Commands::Profiles { .. } => cli::commands::profiles::handle(&cli.command, cfg),
        Commands::Calendar { .. } => cli::commands::calendar::handle(&cli.command, cfg),
        Commands::Normalize { .. } => cli::commands::normalize::handle(&cli.command, cfg),
        Commands::Flag { .. } => cli::commands::flag::handle(&cli.command, cfg),
        Commands::Fields { .. } => cli::commands::fields::handle(&cli.command, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ diagnostics on stderr
    ui::logging::init(cli.verbose);

    // 3️⃣ load config once (custom path or the platform default)
    let config_path = cli
        .config
        .as_deref()
        .map(utils::path::expand_tilde)
        .unwrap_or_else(Config::config_file);
    let mut cfg = Config::load_from(&config_path)?;

    // 4️⃣ command-line overrides
    if let Some(dir) = &cli.output_dir {
        cfg.output_dir = dir.clone();
    }

    dispatch(&cli, &cfg, &config_path)
}
