//! Table filtering over qualified `db.table` names.

mod chain;
mod filter_trait;
mod regex_filter;

pub use chain::TableFilter;
pub use filter_trait::Filter;
pub use regex_filter::{ExcludeFilter, IncludeFilter, PatternSet};
