//! Core types used throughout SchemaDraft
//!
//! This module contains the identifier aliases shared by the IR and the
//! compiler, and the [`SqlDialect`] enumeration used at the dialect
//! adaptation boundary.

use serde::{Deserialize, Serialize};

// ============================================================================
// Unique Identifiers
// ============================================================================

/// Type alias for table unique identifiers
pub type TableId = uuid::Uuid;

/// Type alias for field unique identifiers
pub type FieldId = uuid::Uuid;

/// Type alias for relationship unique identifiers
pub type RelationshipId = uuid::Uuid;

// ============================================================================
// SQL Dialects
// ============================================================================

/// Target SQL dialects supported by the adaptation boundary.
///
/// The compiler core emits dialect-neutral SQL; a [`SqlDialect`] value only
/// matters once the canonical script is handed to a dialect adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SqlDialect {
    /// PostgreSQL
    PostgreSql,
    /// MySQL
    MySql,
    /// MariaDB
    MariaDb,
    /// Microsoft SQL Server
    SqlServer,
    /// SQLite
    Sqlite,
}

impl SqlDialect {
    /// All supported dialects, in display order
    pub fn all() -> &'static [SqlDialect] {
        &[
            SqlDialect::PostgreSql,
            SqlDialect::MySql,
            SqlDialect::MariaDb,
            SqlDialect::SqlServer,
            SqlDialect::Sqlite,
        ]
    }

    /// Stable identifier for this dialect
    pub fn as_str(&self) -> &'static str {
        match self {
            SqlDialect::PostgreSql => "postgresql",
            SqlDialect::MySql => "mysql",
            SqlDialect::MariaDb => "mariadb",
            SqlDialect::SqlServer => "sqlserver",
            SqlDialect::Sqlite => "sqlite",
        }
    }

    /// Human-readable product name
    pub fn display_name(&self) -> &'static str {
        match self {
            SqlDialect::PostgreSql => "PostgreSQL",
            SqlDialect::MySql => "MySQL",
            SqlDialect::MariaDb => "MariaDB",
            SqlDialect::SqlServer => "SQL Server",
            SqlDialect::Sqlite => "SQLite",
        }
    }
}

impl std::fmt::Display for SqlDialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Tests
// ============================================================================
