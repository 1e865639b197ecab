//! Table filter chain.

use tracing::trace;

use super::{ExcludeFilter, Filter, IncludeFilter, PatternSet};
use crate::config::Config;
use crate::domain::{ConfigError, QualifiedTable};

/// Include/exclude rules compiled for repeated evaluation.
///
/// A table is eligible when every filter in the chain allows it. Empty rule
/// lists add no filter, so an empty chain allows everything.
pub struct TableFilter {
    filters: Vec<Box<dyn Filter>>,
}

impl TableFilter {
    /// Compile include and exclude patterns.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPattern` if any pattern is not a valid regex.
    pub fn new<S: AsRef<str>>(include: &[S], exclude: &[S]) -> Result<Self, ConfigError> {
        let mut filters: Vec<Box<dyn Filter>> = Vec::new();

        // Excludes first: a hit there decides the result without scanning includes
        let exclude = PatternSet::compile(exclude)?;
        if !exclude.is_empty() {
            filters.push(Box::new(ExcludeFilter::new(exclude)));
        }

        let include = PatternSet::compile(include)?;
        if !include.is_empty() {
            filters.push(Box::new(IncludeFilter::new(include)));
        }

        Ok(Self { filters })
    }

    /// Compile the rules carried by a configuration.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Self::new(&config.include_table_regex, &config.exclude_table_regex)
    }

    /// Whether `db.table` should be processed.
    pub fn is_eligible(&self, db: &str, table: &str) -> bool {
        self.is_eligible_qualified(&format!("{}.{}", db, table))
    }

    /// Whether the already-qualified name should be processed.
    pub fn is_eligible_qualified(&self, qualified: &str) -> bool {
        for filter in &self.filters {
            if !filter.allows(qualified) {
                trace!("{} rejected by {}", qualified, filter.name());
                return false;
            }
        }
        true
    }

    pub fn is_eligible_table(&self, table: &QualifiedTable) -> bool {
        self.is_eligible_qualified(&table.to_string())
    }

    /// True when no rules are configured.
    pub fn matches_everything(&self) -> bool {
        self.filters.is_empty()
    }
}

impl std::fmt::Debug for TableFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableFilter")
            .field(
                "filters",
                &self.filters.iter().map(|x| x.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
