//! Field definitions for table columns
//!
//! This module contains the `Field` struct describing a single column of a
//! table in the SchemaDraft IR. The `data_type` is a plain SQL scalar type
//! name (`"integer"`, `"varchar"`, ...); keeping it as a string is what
//! allows the type unification pass to rewrite it in place and the emitter
//! to print it verbatim.

use schemadraft_core::{DraftError, DraftResult, FieldId, Validatable};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Field
// ============================================================================

/// Represents a field within a table (maps to a database column)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    /// Unique identifier for this field (unique within its table)
    pub id: FieldId,

    /// Column name
    pub name: String,

    /// SQL scalar type name (e.g. "integer", "varchar", "decimal")
    pub data_type: String,

    /// Maximum character length for string types, e.g. varchar(255)
    pub character_maximum_length: Option<u32>,

    /// Numeric precision, e.g. decimal(10, 2)
    pub precision: Option<u32>,

    /// Numeric scale; only meaningful together with a precision
    pub scale: Option<u32>,

    /// Whether NULL values are allowed. Absence of nullability means the
    /// column is emitted NOT NULL, so the default is `false`.
    pub nullable: bool,

    /// Default value as raw SQL text, emitted verbatim and unescaped
    pub default_value: Option<String>,

    /// Whether this field is the primary key
    pub primary_key: bool,
}

impl Field {
    /// Create a new field with the given name and SQL type
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            data_type: data_type.into(),
            character_maximum_length: None,
            precision: None,
            scale: None,
            nullable: false,
            default_value: None,
            primary_key: false,
        }
    }

    /// Create an integer primary key field named "id"
    pub fn id_primary_key() -> Self {
        Self::new("id", "integer").primary_key()
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// Mark the field as the primary key
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Allow NULL values for this field
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Set the maximum character length
    pub fn with_length(mut self, length: u32) -> Self {
        self.character_maximum_length = Some(length);
        self
    }

    /// Set the numeric precision
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Set the numeric scale (requires a precision to be meaningful)
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Set the default value (raw SQL, emitted verbatim)
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default_value = Some(default.into());
        self
    }

    // ========================================================================
    // Query methods
    // ========================================================================

    /// Check if this field has a non-empty default value
    pub fn has_default(&self) -> bool {
        self.default_value.as_deref().is_some_and(|d| !d.is_empty())
    }
}

impl Validatable for Field {
    fn validate(&self) -> DraftResult<()> {
        if self.name.is_empty() {
            return Err(DraftError::validation("Field name cannot be empty"));
        }

        if self.data_type.is_empty() {
            return Err(DraftError::validation(format!(
                "Field '{}' has no data type",
                self.name
            )));
        }

        if self.scale.is_some() && self.precision.is_none() {
            return Err(DraftError::validation(format!(
                "Field '{}' has a scale without a precision",
                self.name
            )));
        }

        if self.character_maximum_length == Some(0) {
            return Err(DraftError::validation(format!(
                "Field '{}' has a zero character length",
                self.name
            )));
        }

        if self.precision == Some(0) {
            return Err(DraftError::validation(format!(
                "Field '{}' has a zero precision",
                self.name
            )));
        }

        Ok(())
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new("field", "varchar")
    }
}

impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Field {}

// ============================================================================
// Tests
// ============================================================================
