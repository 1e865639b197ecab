//! canal-config: configuration resolution for a MySQL binlog change-capture client.
//!
//! Decodes a TOML document (or builds quick-start defaults) into a typed
//! [`Config`], and compiles its table rules into a [`TableFilter`] that the
//! replication layer consults for every observed table.
//!
//! ```
//! use canal_config::{ConfigService, TableFilter};
//!
//! let config = ConfigService::parse(r#"
//! addr = "10.0.0.1:3306"
//! include_table_regex = [".*\\.canal"]
//! exclude_table_regex = ["mysql\\..*"]
//! "#).unwrap();
//!
//! let filter = TableFilter::from_config(&config).unwrap();
//! assert!(filter.is_eligible("app", "canal"));
//! assert!(!filter.is_eligible("mysql", "canal"));
//! ```

pub mod config;
pub mod domain;
pub mod service;

pub use config::{Config, ConfigService, DumpConfig, TlsConfigHandle};
pub use domain::{
    ConfigError, DumpPlan, DumpTarget, Flavor, QualifiedTable, TableFilter, DEFAULT_CHARSET,
};
