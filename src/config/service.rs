//! Configuration service for loading, defaulting and generating config files.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::Config;
use crate::domain::{derive_server_id, Clock, ConfigError, SystemClock};
use crate::domain::{DEFAULT_CHARSET, MYSQL_FLAVOR};

/// Address used by the quick-start configuration.
pub const DEFAULT_ADDR: &str = "127.0.0.1:3306";

/// Account used by the quick-start configuration.
pub const DEFAULT_USER: &str = "root";

/// Dump executable used by the quick-start configuration, looked up on `PATH`.
pub const DEFAULT_MYSQLDUMP: &str = "mysqldump";

/// Configuration service.
pub struct ConfigService;

impl ConfigService {
    /// Get the default configuration file path.
    /// Always uses ~/.config/canal-config/config.toml for cross-platform consistency.
    pub fn default_path() -> PathBuf {
        Self::default_dir().join("config.toml")
    }

    /// Default log directory, next to the default config file.
    pub fn default_log_dir() -> PathBuf {
        Self::default_dir().join("logs")
    }

    fn default_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("canal-config")
    }

    /// Load configuration from file.
    ///
    /// A read failure is reported as `ConfigError::Io`. Content that is not
    /// UTF-8 or can't be decoded is a decode error (`is_decode()`). No
    /// validation is done here.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let bytes = fs::read(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Read {} bytes from {}", bytes.len(), path.display());

        // Content problems are decode failures, not I/O failures
        let origin = path.display().to_string();
        let content = String::from_utf8(bytes).map_err(|source| ConfigError::InvalidUtf8 {
            origin: origin.clone(),
            source,
        })?;

        Self::decode(&content, &origin)
    }

    /// Decode configuration from TOML text.
    ///
    /// Unknown keys are ignored and missing keys keep their zero values.
    pub fn parse(content: &str) -> Result<Config, ConfigError> {
        Self::decode(content, "<inline>")
    }

    fn decode(content: &str, origin: &str) -> Result<Config, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|source| ConfigError::Decode {
            origin: origin.to_string(),
            source,
        })?;

        debug!(
            "Decoded config from {}: addr={}, server_id={}",
            origin, config.addr, config.server_id
        );
        Ok(config)
    }

    /// Quick-start configuration for a local MySQL server.
    pub fn default_config() -> Config {
        Self::default_config_with_clock(&SystemClock)
    }

    /// Quick-start configuration with the server id seeded from `clock`.
    pub fn default_config_with_clock(clock: &dyn Clock) -> Config {
        let mut config = Config {
            addr: DEFAULT_ADDR.to_string(),
            user: DEFAULT_USER.to_string(),
            password: String::new(),
            charset: DEFAULT_CHARSET.to_string(),
            server_id: derive_server_id(clock),
            flavor: MYSQL_FLAVOR.to_string(),
            ..Config::default()
        };

        config.dump.execution_path = DEFAULT_MYSQLDUMP.to_string();
        config.dump.discard_err = true;
        config.dump.skip_master_data = false;

        debug!("Built default config with server_id={}", config.server_id);
        config
    }

    /// Generate default configuration file at the default path.
    pub fn generate_default() -> Result<()> {
        Self::generate_at(&Self::default_path())
    }

    /// Generate default configuration file at the specified path.
    pub fn generate_at(path: &Path) -> Result<()> {
        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = Self::default_config_content(&Self::default_config());
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Generate default configuration content with comments.
    fn default_config_content(defaults: &Config) -> String {
        format!(
            r#"# canal-config configuration file

# Upstream server
addr = "{addr}"
user = "{user}"
password = ""
charset = "{charset}"
# "mysql" or "mariadb"
flavor = "{flavor}"

# Must be unique among all replicas of the upstream server
server_id = {server_id}

# Durations accept "5s", "1m 30s" or an integer number of nanoseconds
# read_timeout = "90s"
# heartbeat_period = "60s"

# Reconnect attempts after a broken connection (<= 0 retries forever)
# max_reconnect_attempts = 0
# disable_retry_sync = false

# parse_time = false
# use_decimal = false
# semi_sync_enabled = false
# discard_no_meta_row_event = false

# Table filters over "db.table" (unanchored regular expressions)
# Only tables matching include_table_regex and not matching
# exclude_table_regex are processed; empty lists match every table
# include_table_regex = [".*\\.canal"]
# exclude_table_regex = ["mysql\\..*"]

[dump]
# mysqldump executable; leave empty to disable dumping
mysqldump = "{mysqldump}"
# Forward mysqldump stderr when false
discard_err = {discard_err}
# Skip --master-data when FLUSH TABLES WITH READ LOCK is not permitted
skip_master_data = {skip_master_data}

# Dump selected tables of one database (overrides dbs)
# table_db = "shop"
# tables = ["orders", "customers"]

# Or dump whole databases
# dbs = ["shop", "crm"]

# ignore_tables = ["shop.audit_log"]
# where = "id > 1000"
# extra_options = ["--column-statistics=0"]
# max_allowed_packet_mb = 64
"#,
            addr = defaults.addr,
            user = defaults.user,
            charset = defaults.charset,
            flavor = defaults.flavor,
            server_id = defaults.server_id,
            mysqldump = defaults.dump.execution_path,
            discard_err = defaults.dump.discard_err,
            skip_master_data = defaults.dump.skip_master_data,
        )
    }
}
