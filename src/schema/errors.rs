//! Schema error types
//!
//! Error codes:
//! - FLAMES_UNKNOWN_ENTITY (REJECT)
//! - FLAMES_SCHEMA_VALIDATION_FAILED (REJECT)
//! - FLAMES_DUPLICATE_ENTITY (FATAL)
//! - FLAMES_INVALID_DECLARATION (FATAL)

use std::fmt;

/// Severity levels for schema errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Caller request rejected
    Reject,
    /// Registry construction must fail; the process must not serve
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Reject => write!(f, "REJECT"),
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Schema-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaErrorCode {
    /// Entity name not found in the registry
    UnknownEntity,
    /// Document violates an entity schema
    ValidationFailed,
    /// Two entities share a collection identifier
    DuplicateEntity,
    /// An entity declaration is malformed
    InvalidDeclaration,
}

impl SchemaErrorCode {
    /// Returns the string error code
    pub fn code(&self) -> &'static str {
        match self {
            SchemaErrorCode::UnknownEntity => "FLAMES_UNKNOWN_ENTITY",
            SchemaErrorCode::ValidationFailed => "FLAMES_SCHEMA_VALIDATION_FAILED",
            SchemaErrorCode::DuplicateEntity => "FLAMES_DUPLICATE_ENTITY",
            SchemaErrorCode::InvalidDeclaration => "FLAMES_INVALID_DECLARATION",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        match self {
            SchemaErrorCode::UnknownEntity | SchemaErrorCode::ValidationFailed => Severity::Reject,
            SchemaErrorCode::DuplicateEntity | SchemaErrorCode::InvalidDeclaration => {
                Severity::Fatal
            }
        }
    }
}

impl fmt::Display for SchemaErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Per-field validation failure details
#[derive(Debug, Clone)]
pub struct ValidationDetails {
    /// Offending field name
    pub field: String,
    /// Expected type or condition
    pub expected: String,
    /// Actual value or type found
    pub actual: String,
}

impl ValidationDetails {
    pub fn new(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            expected: "field to be present".into(),
            actual: "missing".into(),
        }
    }

    pub fn extra_field(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            expected: "no undeclared fields".into(),
            actual: "extra field present".into(),
        }
    }

    pub fn type_mismatch(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn out_of_range(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

impl fmt::Display for ValidationDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "field '{}': expected {}, got {}",
            self.field, self.expected, self.actual
        )
    }
}

/// Schema error type with full context
#[derive(Debug)]
pub struct SchemaError {
    /// Error code
    code: SchemaErrorCode,
    /// Human-readable message
    message: String,
    /// Entity name if applicable
    entity: Option<String>,
    /// Validation details if applicable
    details: Option<ValidationDetails>,
}

impl SchemaError {
    /// Create an unknown entity error
    pub fn unknown_entity(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            code: SchemaErrorCode::UnknownEntity,
            message: format!("Entity '{}' not found", name),
            entity: Some(name),
            details: None,
        }
    }

    /// Create a validation failed error
    pub fn validation_failed(entity: impl Into<String>, details: ValidationDetails) -> Self {
        let entity = entity.into();
        Self {
            code: SchemaErrorCode::ValidationFailed,
            message: format!("Document validation failed: {}", details),
            entity: Some(entity),
            details: Some(details),
        }
    }

    /// Create a duplicate entity error
    pub fn duplicate_entity(collection: impl Into<String>) -> Self {
        let collection = collection.into();
        Self {
            code: SchemaErrorCode::DuplicateEntity,
            message: format!("Collection '{}' is already registered", collection),
            entity: Some(collection),
            details: None,
        }
    }

    /// Create an invalid declaration error
    pub fn invalid_declaration(entity: impl Into<String>, reason: impl Into<String>) -> Self {
        let entity = entity.into();
        Self {
            code: SchemaErrorCode::InvalidDeclaration,
            message: format!("Invalid declaration for entity '{}': {}", entity, reason.into()),
            entity: Some(entity),
            details: None,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> SchemaErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the entity name if applicable
    pub fn entity(&self) -> Option<&str> {
        self.entity.as_deref()
    }

    /// Returns validation details if applicable
    pub fn details(&self) -> Option<&ValidationDetails> {
        self.details.as_ref()
    }

    /// Returns whether this is a fatal error
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.code.severity(),
            self.code.code(),
            self.message
        )
    }
}

impl std::error::Error for SchemaError {}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;
