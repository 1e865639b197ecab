//! CLI argument parsing and command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use canal_config::service::OutputFormat;

/// Configuration tool for the canal binlog client
#[derive(Parser)]
#[command(
    name = "canal-config",
    version,
    about = "Configuration tool for the canal binlog client",
    long_about = "Generates, validates and inspects the TOML configuration of a MySQL \
                  binlog change-capture client, including its table filters and dump settings."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Directory for debug log files
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a quick-start configuration file
    Init {
        /// Path where to create the configuration file
        #[arg(long, short = 'p')]
        path: Option<PathBuf>,
    },
    /// Validate configuration file
    Check,
    /// Print the decoded configuration
    Show {
        #[arg(long, short = 'f', default_value = "toml")]
        format: OutputFormat,
    },
    /// Evaluate table filters for qualified db.table names
    Match {
        /// Tables in db.table form
        #[arg(required = true)]
        tables: Vec<String>,

        /// Print verdicts as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Describe what the dump step would cover
    DumpPlan,
    /// Display version information
    Version,
}
