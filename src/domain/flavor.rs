//! MySQL dialect tags and protocol constants.

use std::fmt;

/// Flavor tag for upstream MySQL.
pub const MYSQL_FLAVOR: &str = "mysql";

/// Flavor tag for upstream MariaDB.
pub const MARIADB_FLAVOR: &str = "mariadb";

/// Default connection charset.
pub const DEFAULT_CHARSET: &str = "utf8";

/// Database dialect spoken by the upstream server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    MySql,
    MariaDb,
}

impl Flavor {
    /// Resolve a flavor tag. Matching is case-insensitive.
    pub fn from_tag(tag: &str) -> Option<Self> {
        if tag.eq_ignore_ascii_case(MYSQL_FLAVOR) {
            Some(Flavor::MySql)
        } else if tag.eq_ignore_ascii_case(MARIADB_FLAVOR) {
            Some(Flavor::MariaDb)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Flavor::MySql => MYSQL_FLAVOR,
            Flavor::MariaDb => MARIADB_FLAVOR,
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
