//! Error types for SchemaDraft
//!
//! This module provides unified error handling across the workspace,
//! including validation errors, lookup errors, and serialization errors.
//!
//! Note that the compiler core itself never raises these: unresolvable
//! references are skipped during emission, not reported as faults. The
//! error type exists for the IR validation surface and for callers that
//! build diagrams programmatically.

use thiserror::Error;

/// The main error type for SchemaDraft
#[derive(Debug, Error)]
pub enum DraftError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// General validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Table validation failed
    #[error("Table validation failed for '{table}': {message}")]
    TableValidation { table: String, message: String },

    /// Field validation failed
    #[error("Field validation failed for '{table}.{field}': {message}")]
    FieldValidation {
        table: String,
        field: String,
        message: String,
    },

    /// Relationship validation failed
    #[error("Relationship validation failed: {0}")]
    RelationshipValidation(String),

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    /// Table not found
    #[error("Table not found: {0}")]
    TableNotFound(String),

    /// Field not found
    #[error("Field '{field}' not found in table '{table}'")]
    FieldNotFound { table: String, field: String },

    /// Relationship not found
    #[error("Relationship not found: {0}")]
    RelationshipNotFound(String),

    // ========================================================================
    // Duplicate Errors
    // ========================================================================
    /// Duplicate table name
    #[error("Duplicate table name: '{0}' already exists")]
    DuplicateTable(String),

    /// Duplicate field name
    #[error("Duplicate field name: '{field}' already exists in table '{table}'")]
    DuplicateField { table: String, field: String },

    // ========================================================================
    // Serialization Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl DraftError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        DraftError::Validation(msg.into())
    }

    /// Create a table validation error
    pub fn table_validation(table: impl Into<String>, msg: impl Into<String>) -> Self {
        DraftError::TableValidation {
            table: table.into(),
            message: msg.into(),
        }
    }

    /// Create a field validation error
    pub fn field_validation(
        table: impl Into<String>,
        field: impl Into<String>,
        msg: impl Into<String>,
    ) -> Self {
        DraftError::FieldValidation {
            table: table.into(),
            field: field.into(),
            message: msg.into(),
        }
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        DraftError::Internal(msg.into())
    }

    /// Create an error with context
    pub fn with_context(context: impl Into<String>, msg: impl Into<String>) -> Self {
        DraftError::WithContext {
            context: context.into(),
            message: msg.into(),
        }
    }

    /// Check if this error is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DraftError::Validation(_)
                | DraftError::TableValidation { .. }
                | DraftError::FieldValidation { .. }
                | DraftError::RelationshipValidation(_)
        )
    }

    /// Check if this error is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DraftError::TableNotFound(_)
                | DraftError::FieldNotFound { .. }
                | DraftError::RelationshipNotFound(_)
        )
    }
}

/// Result type alias using DraftError
pub type DraftResult<T> = Result<T, DraftError>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn with_context<C: Into<String>>(self, context: C) -> DraftResult<T>;
}

impl<T, E: Into<DraftError>> ResultExt<T> for Result<T, E> {
    fn with_context<C: Into<String>>(self, context: C) -> DraftResult<T> {
        self.map_err(|e| {
            let err: DraftError = e.into();
            DraftError::WithContext {
                context: context.into(),
                message: err.to_string(),
            }
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
