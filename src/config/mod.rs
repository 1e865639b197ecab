//! Configuration management module.
//!
//! Handles TOML configuration decoding, quick-start defaults, validation and
//! default file generation.

mod duration;
mod service;
mod types;
mod validation;

pub use types::{Config, DumpConfig, TlsConfigHandle};

pub use service::{ConfigService, DEFAULT_ADDR, DEFAULT_MYSQLDUMP, DEFAULT_USER};
pub use validation::validate;
