//! sdwan-tf - Rebuild terraform configuration for SD-WAN objects.

mod cli;
mod config;
mod decompile;
mod device;
mod generator;
mod hcl;
mod inventory;
mod logger;
mod naming;
mod state;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = Config::load(&cli)?;

    match &cli.command {
        Commands::Create { dirs, state } => cli::create::create_config(dirs, state, &config).map(|_| ()),
        Commands::Import { dirs, no_apply, .. } => cli::import::import_objects(dirs, *no_apply, &config),
        Commands::Vars { dirs } => cli::vars::create_variables(dirs, &config).map(|_| ()),
    }
}
