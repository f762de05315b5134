//! Core traits for SchemaDraft
//!
//! This module defines the fundamental traits that components throughout
//! the workspace implement to provide consistent behavior.

use crate::error::DraftResult;

// ============================================================================
// Validatable Trait
// ============================================================================

/// Trait for types that can be validated
///
/// Types implementing this trait can check their internal consistency
/// and return validation errors if the state is invalid.
///
/// Validation is advisory for the compiler: the DDL emitter never refuses
/// an inconsistent diagram, it simply skips what it cannot resolve. The
/// trait exists so that diagram editors and loaders can surface problems
/// to the user before compiling.
///
/// # Example
///
/// ```rust,ignore
/// use schemadraft_core::{Validatable, DraftResult, DraftError};
///
/// struct Column {
///     name: String,
/// }
///
/// impl Validatable for Column {
///     fn validate(&self) -> DraftResult<()> {
///         if self.name.is_empty() {
///             return Err(DraftError::validation("Name cannot be empty"));
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Validatable {
    /// Validate the current state of the object
    ///
    /// Returns `Ok(())` if valid, or a `DraftError` describing the problem.
    fn validate(&self) -> DraftResult<()>;

    /// Check if the object is valid without returning error details
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Get all validation errors (for types that can have multiple errors)
    fn validation_errors(&self) -> Vec<String> {
        match self.validate() {
            Ok(()) => vec![],
            Err(e) => vec![e.to_string()],
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
