//! Relationship definitions between tables
//!
//! This module contains the `Relationship` struct of the SchemaDraft IR.
//! A relationship links a source table/field pair to a target table/field
//! pair and carries the name used for the emitted foreign-key constraint.
//! Endpoints are referenced by id; a relationship whose endpoints do not
//! resolve against the diagram is skipped by the compiler, never an error.

use schemadraft_core::{DraftError, DraftResult, FieldId, RelationshipId, TableId, Validatable};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Relationship
// ============================================================================

/// Represents a foreign-key relationship between two tables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Relationship {
    /// Unique identifier for this relationship
    pub id: RelationshipId,

    /// Constraint name used verbatim in the emitted ALTER TABLE statement
    pub name: String,

    /// ID of the source table (the table that receives the FOREIGN KEY)
    pub source_table_id: TableId,

    /// ID of the foreign-key field on the source table
    pub source_field_id: FieldId,

    /// ID of the target table (the referenced table)
    pub target_table_id: TableId,

    /// ID of the referenced field on the target table
    pub target_field_id: FieldId,
}

impl Relationship {
    /// Create a new relationship between two table/field pairs
    pub fn new(
        name: impl Into<String>,
        source_table_id: TableId,
        source_field_id: FieldId,
        target_table_id: TableId,
        target_field_id: FieldId,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            source_table_id,
            source_field_id,
            target_table_id,
            target_field_id,
        }
    }

    /// Check whether this relationship touches the given table
    pub fn involves_table(&self, table_id: TableId) -> bool {
        self.source_table_id == table_id || self.target_table_id == table_id
    }
}

impl Validatable for Relationship {
    fn validate(&self) -> DraftResult<()> {
        if self.name.is_empty() {
            return Err(DraftError::RelationshipValidation(
                "Relationship name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl PartialEq for Relationship {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Relationship {}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_relationship() {
        let (st, sf, tt, tf) = (
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
        );
        let rel = Relationship::new("fk_orders_user", st, sf, tt, tf);

        assert_eq!(rel.name, "fk_orders_user");
        assert!(rel.involves_table(st));
        assert!(rel.involves_table(tt));
        assert!(!rel.involves_table(Uuid::new_v4()));
        assert!(rel.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_empty_name() {
        let rel = Relationship::new(
            "",
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
        );
        assert!(rel.validate().is_err());
    }
}
