//! ADF CLI - Main entry point

use adf_cli::logging::{init_logging, LogConfig, LogLevel, LogOutput};
use adf_cli::{Cli, Commands};
use clap::Parser;
use std::process;
use tracing::error;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize logging based on verbose flag; environment variables take
    // precedence over the flag-derived defaults.
    let log_config = LogConfig::builder()
        .level(if cli.verbose {
            LogLevel::Debug
        } else {
            LogLevel::Warn
        })
        .output(LogOutput::Console)
        .log_file_prefix("adf")
        .build();
    let log_config = LogConfig::from_env(log_config.clone()).unwrap_or(log_config);

    // Initialize logging (ignore errors as the CLI should work without it)
    let _ = init_logging(&log_config);

    // Execute command
    if let Err(e) = execute_command(&cli) {
        error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Execute the CLI command
fn execute_command(cli: &Cli) -> adf_cli::Result<()> {
    match &cli.command {
        Commands::Show {
            location,
            update,
            lenient,
            json,
            limit,
        } => adf_cli::commands::show::run(location, cli.delimiter, *update, *lenient, *json, *limit),

        Commands::Headers { location } => adf_cli::commands::headers::run(location),

        Commands::Validate { location, lenient } => {
            adf_cli::commands::validate::run(location, cli.delimiter, *lenient)
        }

        Commands::Update { location } => adf_cli::commands::update::run(location, cli.delimiter),
    }
}
