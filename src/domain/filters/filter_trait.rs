//! Filter trait definition.

/// Trait for table filters.
pub trait Filter: Send + Sync {
    /// Check if the qualified `db.table` name passes this filter.
    fn allows(&self, qualified: &str) -> bool;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}
