//! canal-config: configuration tool for a MySQL binlog change-capture client.

mod cli;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use canal_config::config::{self, ConfigService};
use canal_config::domain;
use canal_config::service::InspectService;
use canal_config::Config;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging if debug mode
    if cli.debug {
        let log_dir = cli
            .log_dir
            .clone()
            .unwrap_or_else(ConfigService::default_log_dir);
        domain::logger::init(&log_dir)?;
    }

    match cli.command {
        Commands::Init { ref path } => {
            let config_path = if let Some(p) = path {
                ConfigService::generate_at(p)?;
                p.clone()
            } else {
                ConfigService::generate_default()?;
                ConfigService::default_path()
            };
            if !cli.quiet {
                eprintln!("Configuration file created at: {}", config_path.display());
            }
        }
        Commands::Check => {
            let config = load(&cli)?;
            config::validate(&config)?;
            if !cli.quiet {
                eprintln!("Configuration is valid.");
            }
        }
        Commands::Show { format } => {
            let service = InspectService::new(load(&cli)?)?;
            println!("{}", service.render_config(format)?);
        }
        Commands::Match { ref tables, json } => {
            let service = InspectService::new(load(&cli)?)?;
            let verdicts = service.check_tables(tables);
            if json {
                println!("{}", InspectService::render_verdicts_json(&verdicts)?);
            } else {
                for v in &verdicts {
                    let label = if v.eligible { "eligible" } else { "filtered" };
                    println!("{}\t{}", v.table, label);
                }
            }
            if verdicts.iter().any(|v| !v.eligible) {
                process::exit(1);
            }
        }
        Commands::DumpPlan => {
            let service = InspectService::new(load(&cli)?)?;
            print!("{}", service.render_dump_plan());
        }
        Commands::Version => {
            println!("canal-config {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

/// Load the configuration named by `--config`, or the default file.
fn load(cli: &Cli) -> Result<Config> {
    let path = cli
        .config
        .clone()
        .unwrap_or_else(ConfigService::default_path);

    ConfigService::load(&path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))
}
