//! Configuration data types.

use std::any::Any;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::{duration, validation};
use crate::domain::{ConfigError, DumpPlan, Flavor, TableFilter};

/// Main configuration structure.
///
/// `Config::default()` is the structural zero value: empty strings, zero
/// numbers, `false`, empty lists. The quick-start configuration comes from
/// `ConfigService::default_config`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Transport security settings, supplied by the caller
    #[serde(skip)]
    pub tls_config: Option<TlsConfigHandle>,

    /// Offset used when rendering timestamp columns as strings
    #[serde(skip)]
    pub timestamp_string_location: Option<time::UtcOffset>,

    pub user: String,

    pub password: String,

    pub charset: String,

    /// Dialect tag, "mysql" or "mariadb"
    pub flavor: String,

    /// Upstream address, `host:port`
    pub addr: String,

    /// Patterns over `db.table`; a table must match one of them to be processed.
    /// Empty means every table.
    ///
    /// ```toml
    /// include_table_regex = [".*\\.canal"]
    /// exclude_table_regex = ["mysql\\..*"]
    /// ```
    ///
    /// processes the `canal` table of every database except `mysql`.
    pub include_table_regex: Vec<String>,

    /// Patterns over `db.table`; a matching table is never processed
    pub exclude_table_regex: Vec<String>,

    #[serde(with = "duration")]
    pub read_timeout: Duration,

    #[serde(with = "duration")]
    pub heartbeat_period: Duration,

    /// Attempts to re-establish a broken connection; zero or negative retries forever.
    /// Has no effect when `disable_retry_sync` is set.
    pub max_reconnect_attempts: i64,

    /// Id presented to the upstream server; unique among its replicas
    pub server_id: u32,

    pub parse_time: bool,

    pub semi_sync_enabled: bool,

    /// Drop row events whose table metadata is unavailable
    pub discard_no_meta_row_event: bool,

    /// Do not re-sync after a broken connection
    pub disable_retry_sync: bool,

    pub use_decimal: bool,

    pub dump: DumpConfig,
}

impl Config {
    /// Validate configuration and return errors if invalid.
    /// Delegates to the validation module.
    pub fn validate(&self) -> Result<()> {
        validation::validate(self)
    }

    /// Compile the include/exclude table rules.
    pub fn table_filter(&self) -> Result<TableFilter, ConfigError> {
        TableFilter::from_config(self)
    }

    pub fn dump_plan(&self) -> DumpPlan<'_> {
        DumpPlan::new(&self.dump)
    }

    /// Resolve the flavor tag, `None` if unset or unknown.
    pub fn dialect(&self) -> Option<Flavor> {
        Flavor::from_tag(&self.flavor)
    }
}

/// `mysqldump` invocation settings (`[dump]` table).
///
/// # Example
///
/// ```toml
/// [dump]
/// mysqldump = "/usr/bin/mysqldump"
/// table_db = "shop"
/// tables = ["orders", "customers"]
/// ignore_tables = ["shop.audit_log"]
/// discard_err = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DumpConfig {
    /// Executable name or path; empty disables dumping
    #[serde(rename = "mysqldump")]
    pub execution_path: String,

    /// Database the `tables` list belongs to
    pub table_db: String,

    /// Connection protocol override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,

    /// Row filter passed through verbatim; quoting is up to the author
    #[serde(rename = "where", skip_serializing_if = "Option::is_none")]
    pub where_clause: Option<String>,

    /// Tables of `table_db`; overrides `databases` when non-empty
    pub tables: Vec<String>,

    /// Tables to skip, `db.table` format
    pub ignore_tables: Vec<String>,

    #[serde(rename = "dbs")]
    pub databases: Vec<String>,

    /// Extra flags passed to the executable
    pub extra_options: Vec<String>,

    /// Zero or negative keeps the tool default
    pub max_allowed_packet_mb: i64,

    /// Discard the tool's stderr instead of forwarding it
    pub discard_err: bool,

    /// Skip `--master-data`, for accounts without `FLUSH TABLES WITH READ LOCK`
    pub skip_master_data: bool,
}

/// Opaque, caller-owned transport security configuration.
///
/// The handle is reference counted: cloning a [`Config`] shares the same
/// underlying value and never duplicates it. Equality is identity.
#[derive(Clone)]
pub struct TlsConfigHandle(Arc<dyn Any + Send + Sync>);

impl TlsConfigHandle {
    pub fn new<T: Any + Send + Sync>(config: T) -> Self {
        Self(Arc::new(config))
    }

    pub fn from_arc(config: Arc<dyn Any + Send + Sync>) -> Self {
        Self(config)
    }

    /// Borrow the wrapped value if it has type `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }
}

impl PartialEq for TlsConfigHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for TlsConfigHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TlsConfigHandle(..)")
    }
}
