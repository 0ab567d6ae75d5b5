//! Field and entity schema definitions
//!
//! Supported types:
//! - string: UTF-8 string
//! - int: 64-bit signed integer
//! - bool: Boolean
//! - float: 64-bit floating point
//! - date: calendar date, ISO-8601 (YYYY-MM-DD)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

/// Supported field types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// UTF-8 string
    String,
    /// 64-bit signed integer
    Int,
    /// Boolean
    Bool,
    /// 64-bit floating point
    Float,
    /// Calendar date, ISO-8601 (YYYY-MM-DD)
    Date,
}

impl FieldType {
    /// Returns the type name for error messages and the catalog payload
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Int => "int",
            FieldType::Bool => "bool",
            FieldType::Float => "float",
            FieldType::Date => "date",
        }
    }

    /// Whether values of this type are subject to numeric bounds
    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldType::Int | FieldType::Float)
    }

    /// Checks a JSON value against this type.
    ///
    /// `float` accepts integer numbers; `int` does not accept floats;
    /// `date` accepts ISO-8601 calendar date strings.
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            FieldType::String => value.is_string(),
            FieldType::Int => value.is_i64() || value.is_u64(),
            FieldType::Bool => value.is_boolean(),
            FieldType::Float => value.is_number(),
            FieldType::Date => value
                .as_str()
                .map(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok())
                .unwrap_or(false),
        }
    }
}

/// A single field constraint: type, required flag, default value,
/// numeric bounds, and description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field name
    pub name: String,
    /// Field data type
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Whether field must be present
    pub required: bool,
    /// Default applied when an optional field is absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Inclusive lower bound (numeric types only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Inclusive upper bound (numeric types only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Human-readable description shown by the viewer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FieldDef {
    fn new(name: impl Into<String>, field_type: FieldType, required: bool) -> Self {
        Self {
            name: name.into(),
            field_type,
            required,
            default: None,
            min: None,
            max: None,
            description: None,
        }
    }

    /// Create a required string field
    pub fn required_string(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::String, true)
    }

    /// Create an optional string field
    pub fn optional_string(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::String, false)
    }

    /// Create a required int field
    pub fn required_int(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Int, true)
    }

    /// Create an optional int field
    pub fn optional_int(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Int, false)
    }

    /// Create a required bool field
    pub fn required_bool(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Bool, true)
    }

    /// Create an optional bool field
    pub fn optional_bool(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Bool, false)
    }

    /// Create a required float field
    pub fn required_float(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Float, true)
    }

    /// Create an optional float field
    pub fn optional_float(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Float, false)
    }

    /// Create a required date field
    pub fn required_date(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Date, true)
    }

    /// Create an optional date field
    pub fn optional_date(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Date, false)
    }

    /// Attach a description
    pub fn describe(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    /// Attach a default value (optional fields only)
    pub fn with_default(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }

    /// Set the inclusive lower bound
    pub fn ge(mut self, min: impl Into<f64>) -> Self {
        self.min = Some(min.into());
        self
    }

    /// Set the inclusive upper bound
    pub fn le(mut self, max: impl Into<f64>) -> Self {
        self.max = Some(max.into());
        self
    }

    /// Validates the declaration itself (not a document value).
    ///
    /// Bounds are only legal on numeric types, min must not exceed max,
    /// and a declared default must satisfy the field's own constraints.
    /// A required field must not carry a default: it would never apply.
    pub fn validate_declaration(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("field name must not be empty".into());
        }

        if (self.min.is_some() || self.max.is_some()) && !self.field_type.is_numeric() {
            return Err(format!(
                "field '{}': bounds declared on non-numeric type {}",
                self.name,
                self.field_type.type_name()
            ));
        }

        if let (Some(min), Some(max)) = (self.min, self.max) {
            if min > max {
                return Err(format!(
                    "field '{}': min {} exceeds max {}",
                    self.name, min, max
                ));
            }
        }

        if let Some(default) = &self.default {
            if self.required {
                return Err(format!(
                    "field '{}': default declared on a required field",
                    self.name
                ));
            }
            if !self.field_type.accepts(default) {
                return Err(format!(
                    "field '{}': default does not match type {}",
                    self.name,
                    self.field_type.type_name()
                ));
            }
            if let Some(n) = default.as_f64() {
                if self.min.is_some_and(|min| n < min) || self.max.is_some_and(|max| n > max) {
                    return Err(format!(
                        "field '{}': default {} outside declared bounds",
                        self.name, default
                    ));
                }
            }
        }

        Ok(())
    }
}

/// One entity schema: a named record type representing one database
/// collection. The entity name lowercases to the collection identifier
/// (User -> "user").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySchema {
    /// Logical entity name
    pub name: String,
    /// Storage collection identifier (lowercased entity name)
    pub collection: String,
    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Field definitions, in declaration order
    pub fields: Vec<FieldDef>,
}

impl EntitySchema {
    /// Create a new entity schema; the collection identifier is derived
    /// from the entity name.
    pub fn new(name: impl Into<String>, fields: Vec<FieldDef>) -> Self {
        let name = name.into();
        let collection = name.to_lowercase();
        Self {
            name,
            collection,
            description: None,
            fields,
        }
    }

    /// Attach a description
    pub fn describe(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    /// Looks up a field definition by name
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns the required fields
    pub fn required_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|f| f.required)
    }

    /// Validates the schema structure itself (not a document)
    pub fn validate_structure(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("entity name must not be empty".into());
        }

        let mut seen = HashSet::new();
        for field in &self.fields {
            field.validate_declaration()?;
            if !seen.insert(field.name.as_str()) {
                return Err(format!("duplicate field '{}'", field.name));
            }
        }

        Ok(())
    }
}
