//! Document validation against registered entity schemas
//!
//! Validation semantics:
//! - Every required field must be present and type-valid
//! - Numeric fields must satisfy their declared bounds (inclusive)
//! - Absent optional fields take their declared default, else null
//! - An explicit null stays null; it does not take the default
//! - Date values are normalized to canonical YYYY-MM-DD form
//! - Undeclared input fields are dropped (rejected in strict mode)
//!
//! A document is either fully valid, yielding the normalized output, or
//! rejected with the first offending field; there is no partial
//! acceptance. Validation is deterministic and does not mutate its
//! input.

use chrono::NaiveDate;
use serde_json::{Map, Value};

use super::errors::{SchemaError, SchemaResult, ValidationDetails};
use super::registry::SchemaRegistry;
use super::types::{EntitySchema, FieldDef, FieldType};

/// Validation options.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatorOptions {
    /// Reject input fields not declared in the schema instead of
    /// dropping them.
    pub reject_unknown_fields: bool,
}

impl ValidatorOptions {
    /// Options that reject undeclared fields.
    pub fn strict() -> Self {
        Self {
            reject_unknown_fields: true,
        }
    }
}

/// Validates candidate documents against the schemas in a registry.
pub struct DocumentValidator<'a> {
    registry: &'a SchemaRegistry,
    options: ValidatorOptions,
}

impl<'a> DocumentValidator<'a> {
    /// Creates a validator with default options.
    pub fn new(registry: &'a SchemaRegistry) -> Self {
        Self {
            registry,
            options: ValidatorOptions::default(),
        }
    }

    /// Creates a validator with explicit options.
    pub fn with_options(registry: &'a SchemaRegistry, options: ValidatorOptions) -> Self {
        Self { registry, options }
    }

    /// Validates a candidate document against an entity schema.
    ///
    /// Returns the normalized document: declared fields only, defaults
    /// applied to absent optional fields.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError` if:
    /// - The entity name is not registered (FLAMES_UNKNOWN_ENTITY)
    /// - The document violates the schema (FLAMES_SCHEMA_VALIDATION_FAILED)
    pub fn validate(&self, entity_name: &str, document: &Value) -> SchemaResult<Value> {
        let entity = self
            .registry
            .get(entity_name)
            .ok_or_else(|| SchemaError::unknown_entity(entity_name))?;

        let doc = document.as_object().ok_or_else(|| {
            SchemaError::validation_failed(
                &entity.name,
                ValidationDetails::type_mismatch("$root", "object", json_type_name(document)),
            )
        })?;

        if self.options.reject_unknown_fields {
            for key in doc.keys() {
                if entity.field(key).is_none() {
                    return Err(SchemaError::validation_failed(
                        &entity.name,
                        ValidationDetails::extra_field(key),
                    ));
                }
            }
        }

        let mut normalized = Map::new();
        for field in &entity.fields {
            let value = normalize_field(entity, field, doc.get(&field.name))?;
            normalized.insert(field.name.clone(), value);
        }

        Ok(Value::Object(normalized))
    }
}

/// Resolves one field of the candidate document to its normalized
/// value, or fails with the violated constraint.
fn normalize_field(
    entity: &EntitySchema,
    field: &FieldDef,
    value: Option<&Value>,
) -> SchemaResult<Value> {
    let value = match value {
        None => {
            if field.required {
                return Err(SchemaError::validation_failed(
                    &entity.name,
                    ValidationDetails::missing_field(&field.name),
                ));
            }
            return Ok(field.default.clone().unwrap_or(Value::Null));
        }
        Some(v) => v,
    };

    if value.is_null() {
        if field.required {
            return Err(type_error(entity, field, value));
        }
        // explicit null overrides the default
        return Ok(Value::Null);
    }

    match field.field_type {
        FieldType::Date => {
            let parsed = value
                .as_str()
                .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
                .ok_or_else(|| type_error(entity, field, value))?;
            Ok(Value::String(parsed.format("%Y-%m-%d").to_string()))
        }
        _ => {
            if !field.field_type.accepts(value) {
                return Err(type_error(entity, field, value));
            }
            check_bounds(entity, field, value)?;
            Ok(value.clone())
        }
    }
}

/// Checks a numeric value against the field's inclusive bounds.
fn check_bounds(entity: &EntitySchema, field: &FieldDef, value: &Value) -> SchemaResult<()> {
    if !field.field_type.is_numeric() {
        return Ok(());
    }

    let n = match value.as_f64() {
        Some(n) => n,
        None => return Ok(()),
    };

    let out_of_range = field.min.is_some_and(|min| n < min) || field.max.is_some_and(|max| n > max);
    if out_of_range {
        return Err(SchemaError::validation_failed(
            &entity.name,
            ValidationDetails::out_of_range(&field.name, range_text(field), value.to_string()),
        ));
    }

    Ok(())
}

/// Renders the declared bounds for error messages.
fn range_text(field: &FieldDef) -> String {
    match (field.min, field.max) {
        (Some(min), Some(max)) => format!("value in [{}, {}]", min, max),
        (Some(min), None) => format!("value >= {}", min),
        (None, Some(max)) => format!("value <= {}", max),
        (None, None) => "any value".into(),
    }
}

/// Returns the JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Creates a type mismatch error.
fn type_error(entity: &EntitySchema, field: &FieldDef, actual: &Value) -> SchemaError {
    SchemaError::validation_failed(
        &entity.name,
        ValidationDetails::type_mismatch(
            &field.name,
            field.field_type.type_name(),
            json_type_name(actual),
        ),
    )
}
