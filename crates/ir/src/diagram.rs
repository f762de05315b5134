//! Diagram root aggregate
//!
//! This module contains the `Diagram` struct, the root container of the
//! SchemaDraft IR. A diagram owns an ordered list of tables and an ordered
//! list of relationships; both orderings are significant (they determine
//! emission order and the order in which the type unification pass observes
//! relationships). No contained entity outlives the diagram.

use schemadraft_core::{DraftError, DraftResult, FieldId, TableId, Validatable};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::field::Field;
use crate::relationship::Relationship;
use crate::table::Table;

// ============================================================================
// Diagram
// ============================================================================

/// The root aggregate of a schema diagram
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagram {
    /// Unique identifier for this diagram
    pub id: Uuid,

    /// Diagram name
    pub name: String,

    /// Ordered tables (and views)
    pub tables: Vec<Table>,

    /// Ordered relationships between tables
    pub relationships: Vec<Relationship>,
}

impl Diagram {
    /// Create a new empty diagram with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            tables: Vec::new(),
            relationships: Vec::new(),
        }
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Add a table, returning its id
    pub fn add_table(&mut self, table: Table) -> TableId {
        let id = table.id;
        self.tables.push(table);
        id
    }

    /// Add a relationship
    pub fn add_relationship(&mut self, relationship: Relationship) {
        self.relationships.push(relationship);
    }

    /// Remove a table by id, returning it if it existed.
    ///
    /// Relationships referencing the removed table are left in place: the
    /// compiler skips them as unresolvable, matching the lenient policy
    /// used everywhere else.
    pub fn remove_table(&mut self, table_id: TableId) -> Option<Table> {
        let pos = self.tables.iter().position(|t| t.id == table_id)?;
        Some(self.tables.remove(pos))
    }

    // ========================================================================
    // Lookups
    // ========================================================================

    /// Find a table by id
    pub fn table(&self, table_id: TableId) -> Option<&Table> {
        self.tables.iter().find(|t| t.id == table_id)
    }

    /// Find a table by id, mutably
    pub fn table_mut(&mut self, table_id: TableId) -> Option<&mut Table> {
        self.tables.iter_mut().find(|t| t.id == table_id)
    }

    /// Find a table by name
    pub fn table_by_name(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Find a field by table id and field id
    pub fn field(&self, table_id: TableId, field_id: FieldId) -> Option<&Field> {
        self.table(table_id)?.field(field_id)
    }

    // ========================================================================
    // Query methods
    // ========================================================================

    /// Number of tables (including views)
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Number of relationships
    pub fn relationship_count(&self) -> usize {
        self.relationships.len()
    }

    /// Check if the diagram holds no tables and no relationships
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty() && self.relationships.is_empty()
    }
}

impl Default for Diagram {
    fn default() -> Self {
        Self::new("diagram")
    }
}

impl Validatable for Diagram {
    fn validate(&self) -> DraftResult<()> {
        if self.name.is_empty() {
            return Err(DraftError::validation("Diagram name cannot be empty"));
        }

        for table in &self.tables {
            table.validate()?;
        }

        for relationship in &self.relationships {
            relationship.validate()?;
        }

        // Duplicate table names
        for (i, table) in self.tables.iter().enumerate() {
            if self.tables[..i].iter().any(|t| t.name == table.name) {
                return Err(DraftError::DuplicateTable(table.name.clone()));
            }
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

    fn sample_diagram() -> (Diagram, TableId, FieldId) {
        let field = Field::id_primary_key();
        let field_id = field.id;
        let table = Table::new("users").with_field(field);
        let table_id = table.id;

        let mut diagram = Diagram::new("shop");
        diagram.add_table(table);
        (diagram, table_id, field_id)
    }

    #[test]
    fn test_new_diagram_is_empty() {
        let diagram = Diagram::new("empty");
        assert!(diagram.is_empty());
        assert_eq!(diagram.table_count(), 0);
        assert_eq!(diagram.relationship_count(), 0);
        assert!(diagram.validate().is_ok());
    }

    #[test]
    fn test_table_and_field_lookup() {
        let (diagram, table_id, field_id) = sample_diagram();

        assert!(diagram.table(table_id).is_some());
        assert!(diagram.table_by_name("users").is_some());
        assert!(diagram.field(table_id, field_id).is_some());
        assert!(diagram.field(table_id, Uuid::new_v4()).is_none());
        assert!(diagram.field(Uuid::new_v4(), field_id).is_none());
    }

    #[test]
    fn test_remove_table_leaves_relationships() {
        let (mut diagram, table_id, field_id) = sample_diagram();
        diagram.add_relationship(Relationship::new(
            "fk_self",
            table_id,
            field_id,
            table_id,
            field_id,
        ));

        assert!(diagram.remove_table(table_id).is_some());
        assert_eq!(diagram.table_count(), 0);
        // Dangling relationship stays; the compiler skips it later.
        assert_eq!(diagram.relationship_count(), 1);
    }

    #[test]
    fn test_validation_rejects_duplicate_table_names() {
        let mut diagram = Diagram::new("shop");
        diagram.add_table(Table::new("users"));
        diagram.add_table(Table::new("users"));

        let err = diagram.validate().unwrap_err();
        assert!(err.to_string().contains("users"));
    }

    #[test]
    fn test_serde_round_trip() {
        let (diagram, _, _) = sample_diagram();
        let json = serde_json::to_string(&diagram).unwrap();
        let back: Diagram = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name, "shop");
        assert_eq!(back.table_count(), 1);
    }
}
