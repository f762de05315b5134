//! # SchemaDraft IR (Intermediate Representation)
//!
//! This crate provides the intermediate representation for SchemaDraft
//! diagrams. It contains all the data structures needed to represent a
//! database schema diagram: tables, fields, indexes, and relationships.
//!
//! ## Core Concepts
//!
//! - **Table**: a database table (or view) with an ordered list of fields
//! - **Field**: a column of a table, carrying a SQL scalar type name
//! - **Index**: an ordered selection of fields within one table
//! - **Relationship**: a foreign-key link between two table/field pairs
//! - **Diagram**: the root container that owns all tables and relationships
//!
//! The Diagram is constructed and owned entirely by the caller before the
//! compiler runs; the compiler's type unification pass mutates field types
//! in place, and nothing in this crate performs I/O.

// Module declarations
pub mod diagram;
pub mod field;
pub mod index;
pub mod relationship;
pub mod table;

// Re-export commonly used types at crate root
pub use diagram::Diagram;
pub use field::Field;
pub use index::Index;
pub use relationship::Relationship;
pub use table::Table;

// Re-export core types that are commonly used with the IR
pub use schemadraft_core::{
    DraftError, DraftResult, FieldId, RelationshipId, SqlDialect, TableId, Validatable,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Prelude Module
// ============================================================================

/// Convenient re-exports for common usage
pub mod prelude {
    pub use crate::{
        Diagram,
        // Re-exported from core
        DraftError,
        DraftResult,
        Field,
        FieldId,
        Index,
        Relationship,
        SqlDialect,
        Table,
        TableId,
        Validatable,
    };
}
