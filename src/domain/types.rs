//! Core domain types shared by filtering and dump planning.

use std::fmt;

use serde::Serialize;

/// A `database.table` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct QualifiedTable {
    /// Database (schema) name
    pub db: String,

    /// Table name
    pub table: String,
}

impl QualifiedTable {
    /// Create a new QualifiedTable.
    pub fn new(db: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            db: db.into(),
            table: table.into(),
        }
    }

    /// Parse `db.table`, splitting at the first dot.
    ///
    /// Returns `None` when there is no dot or either side is empty.
    /// Table names may themselves contain dots (`db.a.b` is table `a.b`).
    pub fn parse(qualified: &str) -> Option<Self> {
        let (db, table) = qualified.split_once('.')?;
        if db.is_empty() || table.is_empty() {
            return None;
        }
        Some(Self::new(db, table))
    }
}

impl fmt::Display for QualifiedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.db, self.table)
    }
}
