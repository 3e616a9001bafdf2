mod background_service;
mod cli;
mod commands;
mod config;
mod infrastructure;
mod server;

use std::sync::Arc;

use clap::Parser;
use colored::Colorize;

use crate::{
    cli::Cli,
    config::build_config,
    infrastructure::{service_provider::ServiceProvider, telemetry::initialize_telemetry},
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let config = match build_config(cli.config.as_deref()) {
        Ok(x) => x,
        Err(e) => {
            eprintln!("{}: {e}", "Failed to build config".red());
            return;
        }
    };
    if let Err(e) = initialize_telemetry(&config.telemetry) {
        eprintln!("{}: {e}", "Failed to initialize logger".red());
        return;
    }
    let provider = match ServiceProvider::build(config).await {
        Ok(x) => Arc::new(x),
        Err(e) => {
            eprintln!("{}: {e}", "Cannot build Service Provider".red());
            return;
        }
    };
    if let Err(e) = commands::dispatch(cli.command, provider).await {
        eprintln!("{}", e.to_string().red());
        std::process::exit(1);
    }
}
