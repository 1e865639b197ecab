//! Configuration validation.
//!
//! Construction never validates; callers that want a semantic check run this
//! before handing the configuration to the replication layer.

use anyhow::{bail, Result};
use regex::Regex;

use super::Config;
use crate::domain::{Flavor, QualifiedTable};

/// Validate configuration.
pub fn validate(config: &Config) -> Result<()> {
    validate_addr(&config.addr)?;

    if config.user.is_empty() {
        bail!("user cannot be empty");
    }

    if config.server_id == 0 {
        bail!("server_id must be non-zero");
    }

    if Flavor::from_tag(&config.flavor).is_none() {
        bail!(
            "flavor: unknown dialect '{}' (expected 'mysql' or 'mariadb')",
            config.flavor
        );
    }

    validate_patterns("include_table_regex", &config.include_table_regex)?;
    validate_patterns("exclude_table_regex", &config.exclude_table_regex)?;

    // Validate dump section
    let dump = &config.dump;
    for (i, entry) in dump.ignore_tables.iter().enumerate() {
        if QualifiedTable::parse(entry).is_none() {
            bail!(
                "dump.ignore_tables[{}]: '{}' must use db.table format",
                i,
                entry
            );
        }
    }

    if !dump.tables.is_empty() && dump.table_db.is_empty() {
        bail!("dump.table_db is required when dump.tables is set");
    }

    if dump.max_allowed_packet_mb < 0 {
        bail!(
            "dump.max_allowed_packet_mb: {} cannot be negative (0 keeps the tool default)",
            dump.max_allowed_packet_mb
        );
    }

    for (i, option) in dump.extra_options.iter().enumerate() {
        if option.is_empty() {
            bail!("dump.extra_options[{}]: option cannot be empty", i);
        }
    }

    Ok(())
}

fn validate_addr(addr: &str) -> Result<()> {
    if addr.is_empty() {
        bail!("addr cannot be empty");
    }

    // Unix socket
    if addr.starts_with('/') {
        return Ok(());
    }

    let Some((host, port)) = addr.rsplit_once(':') else {
        bail!("addr '{}' must be host:port or a socket path", addr);
    };
    if host.is_empty() {
        bail!("addr '{}': host cannot be empty", addr);
    }
    if port.parse::<u16>().map_or(true, |p| p == 0) {
        bail!("addr '{}': invalid port '{}'", addr, port);
    }

    Ok(())
}

fn validate_patterns(field: &str, patterns: &[String]) -> Result<()> {
    for (i, pattern) in patterns.iter().enumerate() {
        if pattern.is_empty() {
            bail!("{}[{}]: pattern cannot be empty", field, i);
        }

        if let Err(e) = Regex::new(pattern) {
            bail!(
                "{}[{}]: invalid regex pattern '{}': {}",
                field,
                i,
                pattern,
                e
            );
        }
    }
    Ok(())
}
