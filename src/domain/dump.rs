//! Resolution of the `[dump]` section into what the dump invoker should do.

use serde::Serialize;
use tracing::warn;

use super::QualifiedTable;
use crate::config::DumpConfig;

/// What a dump should cover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "scope", rename_all = "snake_case")]
pub enum DumpTarget {
    /// Selected tables of one database. Configured databases are ignored.
    Tables { db: String, tables: Vec<String> },
    /// Whole databases
    Databases { dbs: Vec<String> },
    /// Nothing selected: dump every database
    AllDatabases,
}

/// Read-only view over a [`DumpConfig`] with the precedence rules applied.
#[derive(Debug, Clone, Copy)]
pub struct DumpPlan<'a> {
    config: &'a DumpConfig,
}

impl<'a> DumpPlan<'a> {
    pub fn new(config: &'a DumpConfig) -> Self {
        Self { config }
    }

    /// Dumping is disabled when no executable is configured.
    pub fn is_enabled(&self) -> bool {
        !self.config.execution_path.is_empty()
    }

    pub fn execution_path(&self) -> &str {
        &self.config.execution_path
    }

    /// Resolve the dump scope. A non-empty table list always wins.
    pub fn target(&self) -> DumpTarget {
        if !self.config.tables.is_empty() {
            DumpTarget::Tables {
                db: self.config.table_db.clone(),
                tables: self.config.tables.clone(),
            }
        } else if !self.config.databases.is_empty() {
            DumpTarget::Databases {
                dbs: self.config.databases.clone(),
            }
        } else {
            DumpTarget::AllDatabases
        }
    }

    /// Parsed `ignore_tables`. Entries without a `db.` prefix are skipped.
    pub fn ignore_tables(&self) -> Vec<QualifiedTable> {
        self.config
            .ignore_tables
            .iter()
            .filter_map(|entry| {
                let parsed = QualifiedTable::parse(entry);
                if parsed.is_none() {
                    warn!("ignoring malformed dump.ignore_tables entry '{}'", entry);
                }
                parsed
            })
            .collect()
    }

    pub fn discard_stderr(&self) -> bool {
        self.config.discard_err
    }

    /// Whether the dump should ask for binlog coordinates under a global read lock.
    pub fn request_master_data(&self) -> bool {
        !self.config.skip_master_data
    }

    /// `None` means the tool default.
    pub fn max_allowed_packet_mb(&self) -> Option<i64> {
        Some(self.config.max_allowed_packet_mb).filter(|mb| *mb > 0)
    }

    pub fn protocol(&self) -> Option<&str> {
        self.config.protocol.as_deref().filter(|p| !p.is_empty())
    }

    /// Row filter, passed through verbatim.
    pub fn where_clause(&self) -> Option<&str> {
        self.config.where_clause.as_deref().filter(|w| !w.is_empty())
    }

    pub fn extra_options(&self) -> &[String] {
        &self.config.extra_options
    }
}
