use crate::app_config::AppConfig;
use crate::catalog::CatalogClient;
use crate::cli::Cli;
use crate::commands::CommandError;
use crate::output::OutputFormat;
use clap::Parser;
use std::process::ExitCode;
use tracing::{Level, debug, error};

mod app_config;
mod catalog;
mod cli;
mod commands;
mod domain;
mod extensions;
mod log_level_deserializer;
mod output;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("❌ Invalid configuration: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let level = if cli.verbose { Level::DEBUG } else { config.core().log_level() };
    tracing_subscriber::fmt().with_max_level(level).with_writer(std::io::stderr).init();

    debug!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    match run(cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("❌ {}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, config: AppConfig) -> Result<(), CommandError> {
    let config = match cli.url {
        Some(url) => config.with_catalog_url(url),
        None => config,
    };
    debug!(url = %config.catalog().url(), timeout = ?config.catalog().timeout(), "✅ Loaded configuration");

    let client = CatalogClient::new(&config)?;
    let format = if cli.json { OutputFormat::Json } else { OutputFormat::Text };

    let mut stdout = std::io::stdout().lock();
    commands::run(&client, &cli.command, format, &mut stdout).await
}
