//! rWorktime library root.
//! Exposes the CLI parser, the high-level run() function and the timesheet
//! processing modules (parser, calculator, processor, report).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod input;
pub mod models;
pub mod report;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands, RunArgs};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        None => cli::commands::run::handle(&RunArgs::default(), cfg),
        Some(Commands::Run(args)) => cli::commands::run::handle(args, cfg),
        Some(cmd @ Commands::Parse { .. }) => cli::commands::parse::handle(cmd),
        Some(cmd @ Commands::Init { .. }) => cli::commands::init::handle(cmd, config_path),
        Some(cmd @ Commands::Config { .. }) => cli::commands::config::handle(cmd, cfg, config_path),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ resolve and load config once
    let config_path = cli
        .config
        .as_deref()
        .map(utils::path::expand_tilde)
        .unwrap_or_else(Config::config_file);

    // `init` must work even when the existing file is broken
    let cfg = match &cli.command {
        Some(Commands::Init { .. }) => Config::default(),
        _ => Config::load(&config_path)?,
    };

    // 3️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg, &config_path)
}
