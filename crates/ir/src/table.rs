//! Table definitions
//!
//! This module contains the `Table` struct of the SchemaDraft IR. A table
//! owns an ordered list of fields (column order is significant for the
//! emitted DDL) and an ordered list of indexes. A table may also be a view,
//! in which case it is excluded from CREATE TABLE and index emission.

use schemadraft_core::{DraftError, DraftResult, FieldId, TableId, Validatable};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::field::Field;
use crate::index::Index;

// ============================================================================
// Table
// ============================================================================

/// Represents a table (or view) in the diagram
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    /// Unique identifier for this table
    pub id: TableId,

    /// Table name, used verbatim in emitted statements
    pub name: String,

    /// Whether this is a view. Views are never emitted as CREATE TABLE and
    /// their indexes are never emitted either.
    pub is_view: bool,

    /// Ordered fields. Order determines emitted column order and
    /// trailing-comma placement.
    pub fields: Vec<Field>,

    /// Ordered indexes on this table
    pub indexes: Vec<Index>,
}

impl Table {
    /// Create a new empty table with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            is_view: false,
            fields: Vec::new(),
            indexes: Vec::new(),
        }
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// Mark the table as a view
    pub fn view(mut self) -> Self {
        self.is_view = true;
        self
    }

    /// Append a field to the table
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Append an index to the table
    pub fn with_index(mut self, index: Index) -> Self {
        self.indexes.push(index);
        self
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Add a field, returning its id
    pub fn add_field(&mut self, field: Field) -> FieldId {
        let id = field.id;
        self.fields.push(field);
        id
    }

    /// Add an index
    pub fn add_index(&mut self, index: Index) {
        self.indexes.push(index);
    }

    // ========================================================================
    // Lookups
    // ========================================================================

    /// Find a field by id
    pub fn field(&self, field_id: FieldId) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == field_id)
    }

    /// Find a field by id, mutably
    pub fn field_mut(&mut self, field_id: FieldId) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.id == field_id)
    }

    /// Find a field by name
    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Number of fields
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

impl Validatable for Table {
    fn validate(&self) -> DraftResult<()> {
        if self.name.is_empty() {
            return Err(DraftError::validation("Table name cannot be empty"));
        }

        for field in &self.fields {
            field
                .validate()
                .map_err(|e| DraftError::table_validation(&self.name, e.to_string()))?;
        }

        for index in &self.indexes {
            index
                .validate()
                .map_err(|e| DraftError::table_validation(&self.name, e.to_string()))?;
        }

        // Duplicate field names within one table
        for (i, field) in self.fields.iter().enumerate() {
            if self.fields[..i].iter().any(|f| f.name == field.name) {
                return Err(DraftError::DuplicateField {
                    table: self.name.clone(),
                    field: field.name.clone(),
                });
            }
        }

        Ok(())
    }
}

impl PartialEq for Table {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Table {}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_table_defaults() {
        let table = Table::new("users");
        assert_eq!(table.name, "users");
        assert!(!table.is_view);
        assert_eq!(table.field_count(), 0);
        assert!(table.validate().is_ok());
    }

    #[test]
    fn test_field_lookup_by_id_and_name() {
        let field = Field::new("email", "varchar").with_length(255);
        let field_id = field.id;
        let table = Table::new("users").with_field(field);

        assert!(table.field(field_id).is_some());
        assert!(table.field_by_name("email").is_some());
        assert!(table.field(Uuid::new_v4()).is_none());
        assert!(table.field_by_name("missing").is_none());
    }

    #[test]
    fn test_view_builder() {
        let table = Table::new("active_users").view();
        assert!(table.is_view);
    }

    #[test]
    fn test_add_field_returns_id() {
        let mut table = Table::new("users");
        let id = table.add_field(Field::new("name", "varchar"));
        assert_eq!(table.field(id).unwrap().name, "name");
    }

    #[test]
    fn test_validation_rejects_duplicate_field_names() {
        let table = Table::new("users")
            .with_field(Field::new("email", "varchar"))
            .with_field(Field::new("email", "text"));

        let err = table.validate().unwrap_err();
        assert!(err.to_string().contains("email"));
    }

    #[test]
    fn test_validation_propagates_field_errors() {
        let table = Table::new("users").with_field(Field::new("amount", "numeric").with_scale(2));
        let err = table.validate().unwrap_err();
        assert!(err.is_validation());
    }
}
