//! Service layer containing report orchestration.

mod inspect_service;

pub use inspect_service::{InspectService, OutputFormat, TableVerdict};
