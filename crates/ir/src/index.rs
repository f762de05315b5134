//! Index definitions for tables
//!
//! This module contains the `Index` struct describing a (possibly unique)
//! index over an ordered selection of fields within one table. Fields are
//! referenced by id; entries that do not resolve against the owning table
//! are dropped at emission time rather than treated as errors.

use schemadraft_core::{DraftError, DraftResult, FieldId, Validatable};
use serde::{Deserialize, Serialize};

// ============================================================================
// Index
// ============================================================================

/// Represents an index on a table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Index {
    /// Index name, used verbatim in the emitted CREATE INDEX statement
    pub name: String,

    /// Whether this is a UNIQUE index
    pub unique: bool,

    /// Ordered field ids within the owning table. Order is significant:
    /// it determines the column order of the emitted index.
    pub field_ids: Vec<FieldId>,
}

impl Index {
    /// Create a new (non-unique) index with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            unique: false,
            field_ids: Vec::new(),
        }
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// Mark the index as UNIQUE
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Append a field to the index
    pub fn with_field(mut self, field_id: FieldId) -> Self {
        self.field_ids.push(field_id);
        self
    }

    /// Append several fields to the index
    pub fn with_fields(mut self, field_ids: impl IntoIterator<Item = FieldId>) -> Self {
        self.field_ids.extend(field_ids);
        self
    }

    // ========================================================================
    // Query methods
    // ========================================================================

    /// Check if the index references no fields at all
    pub fn is_empty(&self) -> bool {
        self.field_ids.is_empty()
    }
}

impl Validatable for Index {
    fn validate(&self) -> DraftResult<()> {
        if self.name.is_empty() {
            return Err(DraftError::validation("Index name cannot be empty"));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_new_index_defaults() {
        let index = Index::new("idx_users_email");
        assert_eq!(index.name, "idx_users_email");
        assert!(!index.unique);
        assert!(index.is_empty());
        assert!(index.validate().is_ok());
    }

    #[test]
    fn test_builder_preserves_field_order() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let index = Index::new("idx").with_field(a).with_field(b).unique();

        assert!(index.unique);
        assert_eq!(index.field_ids, vec![a, b]);
    }

    #[test]
    fn test_validation_rejects_empty_name() {
        let index = Index::new("");
        assert!(index.validate().is_err());
    }
}
