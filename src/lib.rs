//! flames-schema - Schema registry and document validation for the
//! Flames database viewer.
//!
//! The viewer reads the schema catalog, performs all CRUD itself, and
//! uses these schemas purely for input validation before writing to a
//! collection.

pub mod cli;
pub mod observability;
pub mod schema;
