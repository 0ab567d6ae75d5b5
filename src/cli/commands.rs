//! CLI command implementations
//!
//! Each command rebuilds the registry from the built-in declarations,
//! performs one operation, and writes JSON to stdout. A declaration
//! failure is fatal: nothing is served from a registry that failed to
//! build.

use std::path::Path;

use crate::observability::Logger;
use crate::schema::{DocumentValidator, SchemaCatalog, SchemaRegistry, ValidatorOptions};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::{read_document, write_error, write_json, write_response};

/// Parse arguments and dispatch
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatch a parsed command
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Catalog { compact } => catalog(compact),
        Command::List => list(),
        Command::Validate {
            entity,
            file,
            strict,
        } => validate(&entity, file.as_deref(), strict),
    }
}

/// Build the registry from the built-in declarations
fn boot_registry() -> CliResult<SchemaRegistry> {
    SchemaRegistry::builtin().map_err(|e| {
        Logger::fatal(
            "SCHEMA_DECLARATION_INVALID",
            &[("code", e.code().code()), ("error", e.message())],
        );
        CliError::registry_failed(e.to_string())
    })
}

/// Print the schema catalog served to the viewer
pub fn catalog(compact: bool) -> CliResult<()> {
    let registry = boot_registry()?;
    let catalog = SchemaCatalog::from_registry(&registry);

    let payload = if compact {
        catalog.to_json()
    } else {
        catalog.to_json_pretty()
    }
    .map_err(|e| CliError::io_error(e.to_string()))?;

    write_json(&payload)
}

/// List the registered collections
pub fn list() -> CliResult<()> {
    let registry = boot_registry()?;
    let collections = registry.collections();

    write_response(serde_json::json!({ "collections": collections }))
}

/// Validate a JSON document against an entity schema
///
/// The normalized document goes to stdout on success; a rejection is a
/// result, not a CLI failure, and is written as an error response.
pub fn validate(entity: &str, file: Option<&Path>, strict: bool) -> CliResult<()> {
    let registry = boot_registry()?;
    let options = if strict {
        ValidatorOptions::strict()
    } else {
        ValidatorOptions::default()
    };
    let validator = DocumentValidator::with_options(&registry, options);

    let document = read_document(file)?;

    match validator.validate(entity, &document) {
        Ok(normalized) => write_response(normalized),
        Err(e) => {
            let field = e.details().map(|d| d.field.as_str()).unwrap_or("-");
            Logger::error(
                "DOCUMENT_REJECTED",
                &[
                    ("code", e.code().code()),
                    ("entity", entity),
                    ("field", field),
                ],
            );
            write_error(e.code().code(), e.message())
        }
    }
}
