//! Inspection service behind the `show`, `match` and `dump-plan` commands.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::Config;
use crate::domain::{ConfigError, DumpTarget, TableFilter};

const MASKED_PASSWORD: &str = "******";

/// Rendering format for the `show` command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// TOML, same shape as the input file (default)
    #[default]
    Toml,
    /// Pretty-printed JSON
    Json,
}

/// Eligibility of one qualified table name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableVerdict {
    pub table: String,
    pub eligible: bool,
}

/// Service answering questions about a loaded configuration.
pub struct InspectService {
    config: Config,
    filter: TableFilter,
}

impl InspectService {
    /// Create a new InspectService, compiling the table rules once.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let filter = config.table_filter()?;
        debug!("Compiled table filter: {:?}", filter);
        Ok(Self { config, filter })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Render the configuration with the password masked.
    pub fn render_config(&self, format: OutputFormat) -> Result<String> {
        let mut shown = self.config.clone();
        if !shown.password.is_empty() {
            shown.password = MASKED_PASSWORD.to_string();
        }

        match format {
            OutputFormat::Toml => {
                toml::to_string_pretty(&shown).context("Failed to render config as TOML")
            }
            OutputFormat::Json => {
                serde_json::to_string_pretty(&shown).context("Failed to render config as JSON")
            }
        }
    }

    /// Evaluate each `db.table` name against the include/exclude rules.
    pub fn check_tables<S: AsRef<str>>(&self, tables: &[S]) -> Vec<TableVerdict> {
        tables
            .iter()
            .map(|t| {
                let table = t.as_ref();
                let eligible = self.filter.is_eligible_qualified(table);
                info!("{} -> {}", table, if eligible { "eligible" } else { "filtered" });
                TableVerdict {
                    table: table.to_string(),
                    eligible,
                }
            })
            .collect()
    }

    /// Render verdicts as a JSON array of `{"table", "eligible"}` objects.
    pub fn render_verdicts_json(verdicts: &[TableVerdict]) -> Result<String> {
        serde_json::to_string_pretty(verdicts).context("Failed to render verdicts as JSON")
    }

    /// Human-readable summary of what the dump invoker would do.
    pub fn render_dump_plan(&self) -> String {
        let plan = self.config.dump_plan();
        let mut out = String::new();

        if !plan.is_enabled() {
            out.push_str("dump: disabled (no mysqldump configured)\n");
            return out;
        }

        let _ = writeln!(out, "executable: {}", plan.execution_path());
        match plan.target() {
            DumpTarget::Tables { db, tables } => {
                let _ = writeln!(out, "scope: tables of '{}': {}", db, tables.join(", "));
                if !self.config.dump.databases.is_empty() {
                    let _ = writeln!(
                        out,
                        "note: dbs ({}) ignored because tables is set",
                        self.config.dump.databases.join(", ")
                    );
                }
            }
            DumpTarget::Databases { dbs } => {
                let _ = writeln!(out, "scope: databases: {}", dbs.join(", "));
            }
            DumpTarget::AllDatabases => {
                out.push_str("scope: all databases\n");
            }
        }

        let ignored = plan.ignore_tables();
        if !ignored.is_empty() {
            let names: Vec<String> = ignored.iter().map(|t| t.to_string()).collect();
            let _ = writeln!(out, "ignore: {}", names.join(", "));
        }
        if let Some(clause) = plan.where_clause() {
            let _ = writeln!(out, "where: {}", clause);
        }
        if let Some(protocol) = plan.protocol() {
            let _ = writeln!(out, "protocol: {}", protocol);
        }
        if let Some(mb) = plan.max_allowed_packet_mb() {
            let _ = writeln!(out, "max_allowed_packet: {}M", mb);
        }
        if !plan.extra_options().is_empty() {
            let _ = writeln!(out, "extra options: {}", plan.extra_options().join(" "));
        }
        let _ = writeln!(out, "master data: {}", plan.request_master_data());
        let _ = writeln!(out, "discard stderr: {}", plan.discard_stderr());

        out
    }
}
