//! Observability for flames-schema
//!
//! Structured JSON logging only: the registry is static metadata, so
//! there is nothing to meter. Logging is synchronous, read-only, and
//! has no effect on validation results.

mod logger;

pub use logger::{Logger, Severity};
