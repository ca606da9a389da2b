//! Convene CLI binary.

use clap::Parser;
use convene::cli::{map_error, Cli, RunContext};
use convene::config::{ConfigLoader, ConveneConfig};
use convene::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{debug, error};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    let logging_config = build_logging_config(&cli, &config);
    if let Err(e) = init_logging(&logging_config) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    debug!("Convene CLI starting");

    let context = match RunContext::new(&config, cli.output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error initializing session: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    match context.execute(cli.command).await {
        Ok(Some(output)) => println!("{}", output),
        Ok(None) => {}
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}

fn load_config(cli: &Cli) -> Result<ConveneConfig, convene::error::CommandError> {
    match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
}

/// Build logging configuration. Precedence: CLI flags over config file
/// over defaults.
fn build_logging_config(cli: &Cli, config: &ConveneConfig) -> LoggingConfig {
    let mut logging = config.logging.clone();
    if cli.verbose {
        logging.level = "info".to_string();
    }
    if cli.debug {
        logging.level = "debug".to_string();
    }
    logging
}
