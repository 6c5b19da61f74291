//! ADF CLI Library
//!
//! Command-line interface for inspecting and updating ADF asset files:
//!
//! - **Inspection**: print records as a table or JSON lines (`adf show`)
//! - **Metadata**: print header key/values (`adf headers`)
//! - **Validation**: check schema and rows, report counts (`adf validate`)
//! - **Updating**: pull a newer remote copy into the local file (`adf update`)

pub mod commands;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use error::{CliError, Result};

use clap::{Parser, Subcommand};

/// ADF - typed delimited-text asset files
#[derive(Parser, Debug)]
#[command(name = "adf")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Field delimiter
    #[arg(short, long, env = "ADF_DELIMITER", default_value = ",", global = true)]
    pub delimiter: char,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load an asset file and print its records
    Show {
        /// Asset file path or URL
        location: String,

        /// Check the url header for a newer remote copy first
        #[arg(short, long)]
        update: bool,

        /// Skip malformed rows instead of failing
        #[arg(long)]
        lenient: bool,

        /// Print records as JSON lines instead of a table
        #[arg(long)]
        json: bool,

        /// Print at most N records
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Print the header metadata of an asset file
    Headers {
        /// Asset file path or URL
        location: String,
    },

    /// Load an asset file and report whether it is well-formed
    Validate {
        /// Asset file path or URL
        location: String,

        /// Skip malformed rows instead of failing
        #[arg(long)]
        lenient: bool,
    },

    /// Replace the local file with the remote copy when it is newer
    Update {
        /// Asset file path
        location: String,
    },
}
