//! Domain layer containing core logic.
//!
//! This module contains:
//! - Error type shared by construction and filter compilation
//! - Table filters over qualified names
//! - Dump scope resolution
//! - Server id derivation and dialect constants
//! - Logger with rotation

pub mod dump;
mod error;
pub mod filters;
mod flavor;
pub mod logger;
pub mod server_id;
mod types;

pub use dump::{DumpPlan, DumpTarget};
pub use error::ConfigError;
pub use filters::TableFilter;
pub use flavor::{Flavor, DEFAULT_CHARSET, MARIADB_FLAVOR, MYSQL_FLAVOR};
pub use server_id::{derive_server_id, Clock, FixedClock, SystemClock};
pub use types::QualifiedTable;
